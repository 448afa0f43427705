//! # Validation Suite
//!
//! A fixed table of checks exercising the literal parser and the family
//! policy end to end. The CLI runs it to vouch for the platform it is on.

use srcbind_common::network::address::{self, AddressFamily};

use AddressFamily::{Ipv4Only, Ipv6Only, Unspecified};

enum Check {
    /// Strict IPv4 parse result.
    Ipv4(&'static str, bool),
    /// Strict IPv6 parse result.
    Ipv6(&'static str, bool),
    /// Family verdict for a (possibly absent) literal.
    Matches(Option<&'static str>, AddressFamily, bool),
    /// Both literals denote the same address.
    Equivalent(&'static str, &'static str),
}

impl Check {
    fn holds(&self) -> bool {
        match *self {
            Check::Ipv4(text, expected) => address::parse_ipv4(text).is_some() == expected,
            Check::Ipv6(text, expected) => address::parse_ipv6(text).is_some() == expected,
            Check::Matches(text, family, expected) => address::matches(text, family) == expected,
            Check::Equivalent(a, b) => {
                let a = address::classify(Some(a));
                a.is_valid() && a == address::classify(Some(b))
            }
        }
    }
}

struct Case {
    group: &'static str,
    description: &'static str,
    check: Check,
}

const fn case(group: &'static str, description: &'static str, check: Check) -> Case {
    Case {
        group,
        description,
        check,
    }
}

const IPV4_VALID: &str = "IPv4 addresses";
const IPV4_INVALID: &str = "IPv4 invalid";
const IPV6_VALID: &str = "IPv6 addresses";
const IPV6_SPECIAL: &str = "IPv6 special";
const IPV6_INVALID: &str = "IPv6 invalid";
const MATCH_UNSPEC: &str = "Unspecified family matching";
const MATCH_V4: &str = "IPv4-only family matching";
const MATCH_V6: &str = "IPv6-only family matching";
const MATCH_INVALID: &str = "Invalid address family matching";
const EDGE: &str = "Edge cases";

const CASES: &[Case] = &[
    case(IPV4_VALID, "standard private address", Check::Ipv4("192.168.1.1", true)),
    case(IPV4_VALID, "10.x private address", Check::Ipv4("10.0.0.1", true)),
    case(IPV4_VALID, "172.16.x private address", Check::Ipv4("172.16.0.1", true)),
    case(IPV4_VALID, "loopback address", Check::Ipv4("127.0.0.1", true)),
    case(IPV4_VALID, "broadcast address", Check::Ipv4("255.255.255.255", true)),
    case(IPV4_VALID, "zero address", Check::Ipv4("0.0.0.0", true)),
    case(IPV4_VALID, "public address", Check::Ipv4("8.8.8.8", true)),
    case(IPV4_INVALID, "octet out of range", Check::Ipv4("256.1.1.1", false)),
    case(IPV4_INVALID, "too few octets", Check::Ipv4("1.2.3", false)),
    case(IPV4_INVALID, "too many octets", Check::Ipv4("1.2.3.4.5", false)),
    case(IPV4_INVALID, "non-numeric", Check::Ipv4("not.an.ip", false)),
    case(IPV4_INVALID, "empty string", Check::Ipv4("", false)),
    case(IPV4_INVALID, "leading space", Check::Ipv4(" 192.168.1.1", false)),
    case(IPV4_INVALID, "trailing space", Check::Ipv4("192.168.1.1 ", false)),
    case(IPV6_VALID, "compressed format", Check::Ipv6("2001:db8::1", true)),
    case(IPV6_VALID, "loopback", Check::Ipv6("::1", true)),
    case(IPV6_VALID, "link-local", Check::Ipv6("fe80::1", true)),
    case(IPV6_VALID, "all zeros compressed", Check::Ipv6("::", true)),
    case(
        IPV6_VALID,
        "full uncompressed format",
        Check::Ipv6("2001:0db8:0000:0000:0000:0000:0000:0001", true),
    ),
    case(IPV6_SPECIAL, "IPv4-mapped IPv6", Check::Ipv6("::ffff:192.168.1.1", true)),
    case(IPV6_SPECIAL, "IPv4-mapped IPv6 hex format", Check::Ipv6("::ffff:c0a8:0101", true)),
    case(IPV6_SPECIAL, "mixed compression", Check::Ipv6("2001:db8:85a3::8a2e:370:7334", true)),
    case(IPV6_SPECIAL, "partial zeros", Check::Ipv6("2001:db8:85a3:0:0:8a2e:370:7334", true)),
    case(IPV6_INVALID, "invalid hex characters", Check::Ipv6("gggg::1", false)),
    case(IPV6_INVALID, "double compression", Check::Ipv6("2001:db8::1::2", false)),
    case(IPV6_INVALID, "empty string", Check::Ipv6("", false)),
    case(IPV6_INVALID, "leading space", Check::Ipv6(" ::1", false)),
    case(IPV6_INVALID, "hostname not IPv6", Check::Ipv6("localhost", false)),
    case(IPV6_INVALID, "IPv4 not IPv6", Check::Ipv6("192.168.1.1", false)),
    case(MATCH_UNSPEC, "IPv4 with unspecified", Check::Matches(Some("192.168.1.1"), Unspecified, true)),
    case(MATCH_UNSPEC, "IPv6 with unspecified", Check::Matches(Some("2001:db8::1"), Unspecified, true)),
    case(MATCH_UNSPEC, "IPv6 loopback with unspecified", Check::Matches(Some("::1"), Unspecified, true)),
    case(MATCH_V4, "IPv4 with IPv4-only", Check::Matches(Some("192.168.1.1"), Ipv4Only, true)),
    case(MATCH_V4, "IPv6 rejected with IPv4-only", Check::Matches(Some("2001:db8::1"), Ipv4Only, false)),
    case(MATCH_V4, "IPv6 loopback rejected with IPv4-only", Check::Matches(Some("::1"), Ipv4Only, false)),
    case(MATCH_V6, "IPv6 with IPv6-only", Check::Matches(Some("2001:db8::1"), Ipv6Only, true)),
    case(MATCH_V6, "IPv6 loopback with IPv6-only", Check::Matches(Some("::1"), Ipv6Only, true)),
    case(MATCH_V6, "IPv4 rejected with IPv6-only", Check::Matches(Some("192.168.1.1"), Ipv6Only, false)),
    case(MATCH_INVALID, "invalid address with unspecified", Check::Matches(Some("not.an.ip"), Unspecified, false)),
    case(MATCH_INVALID, "invalid address with IPv4-only", Check::Matches(Some("not.an.ip"), Ipv4Only, false)),
    case(MATCH_INVALID, "invalid address with IPv6-only", Check::Matches(Some("not.an.ip"), Ipv6Only, false)),
    case(MATCH_INVALID, "absent address", Check::Matches(None, Unspecified, false)),
    case(MATCH_INVALID, "empty string", Check::Matches(Some(""), Unspecified, false)),
    case(MATCH_INVALID, "octet overflow", Check::Matches(Some("256.1.1.1"), Unspecified, false)),
    case(EDGE, "IPv4-mapped IPv6 is valid IPv6", Check::Ipv6("::ffff:192.168.1.1", true)),
    case(EDGE, "IPv4-mapped IPv6 is not valid IPv4", Check::Ipv4("::ffff:192.168.1.1", false)),
    case(
        EDGE,
        "compressed and full IPv6 are equivalent",
        Check::Equivalent("2001:db8::1", "2001:0db8:0000:0000:0000:0000:0000:0001"),
    ),
    case(
        EDGE,
        "dotted and hex IPv4-mapped forms are equivalent",
        Check::Equivalent("::ffff:192.168.1.1", "::ffff:c0a8:0101"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub group: &'static str,
    pub description: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every case in table order.
pub fn run() -> SuiteReport {
    let outcomes: Vec<CaseOutcome> = CASES
        .iter()
        .map(|c| CaseOutcome {
            group: c.group,
            description: c.description,
            passed: c.check.holds(),
        })
        .collect();

    SuiteReport { outcomes }
}
