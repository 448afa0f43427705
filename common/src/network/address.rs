//! # Address Literals and Family Policy
//!
//! Decides whether a candidate source address is a usable literal and whether
//! it fits the address family a client has been restricted to.
//!
//! * [`classify`] turns text into a [`ParsedAddress`].
//! * [`matches`] applies an [`AddressFamily`] constraint on top of it.
//!
//! Both are total: malformed, empty or absent input is `Invalid` / `false`,
//! never an error.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// The family constraint a client binds or connects under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    /// Dual-stack, any valid literal is acceptable.
    #[default]
    Unspecified,
    /// Only IPv4 sources and peers.
    Ipv4Only,
    /// Only IPv6 sources and peers.
    Ipv6Only,
}

impl AddressFamily {
    /// Maps the usual `-4` / `-6` switches onto a family.
    ///
    /// Setting both is treated as no restriction at all.
    pub fn from_flags(ipv4: bool, ipv6: bool) -> Self {
        match (ipv4, ipv6) {
            (true, false) => AddressFamily::Ipv4Only,
            (false, true) => AddressFamily::Ipv6Only,
            _ => AddressFamily::Unspecified,
        }
    }

    /// Whether an already classified address is allowed under this family.
    pub fn admits(&self, parsed: &ParsedAddress) -> bool {
        match (self, parsed) {
            (_, ParsedAddress::Invalid) => false,
            (AddressFamily::Ipv6Only, ParsedAddress::Ipv4(_)) => false,
            (AddressFamily::Ipv4Only, ParsedAddress::Ipv6(_)) => false,
            _ => true,
        }
    }

    /// The constrained family an address belongs to.
    pub fn of(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4Only,
            IpAddr::V6(_) => AddressFamily::Ipv6Only,
        }
    }

    pub fn admits_ip(&self, ip: IpAddr) -> bool {
        self.admits(&ParsedAddress::from(ip))
    }

    /// The wildcard address to bind when only the family is constrained.
    pub fn unspecified_addr(&self) -> Option<IpAddr> {
        match self {
            AddressFamily::Unspecified => None,
            AddressFamily::Ipv4Only => Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            AddressFamily::Ipv6Only => Some(IpAddr::V6(Ipv6Addr::UNSPECIFIED)),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Unspecified => write!(f, "unspecified"),
            AddressFamily::Ipv4Only => write!(f, "IPv4-only"),
            AddressFamily::Ipv6Only => write!(f, "IPv6-only"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    /// Accepts `any`/`unspec`, `4`/`inet`/`ipv4` and `6`/`inet6`/`ipv6`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "unspec" | "unspecified" => Ok(AddressFamily::Unspecified),
            "4" | "inet" | "ipv4" => Ok(AddressFamily::Ipv4Only),
            "6" | "inet6" | "ipv6" => Ok(AddressFamily::Ipv6Only),
            _ => Err(format!("invalid address family: {s}")),
        }
    }
}

/// Result of classifying a literal.
///
/// Equal network addresses compare equal no matter how they were written,
/// e.g. `2001:db8::1` and `2001:0db8:0000:0000:0000:0000:0000:0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedAddress {
    Invalid,
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
}

impl ParsedAddress {
    pub fn is_valid(&self) -> bool {
        !matches!(self, ParsedAddress::Invalid)
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            ParsedAddress::Invalid => None,
            ParsedAddress::Ipv4(v4) => Some(IpAddr::V4(*v4)),
            ParsedAddress::Ipv6(v6) => Some(IpAddr::V6(*v6)),
        }
    }

    /// Numeric value of the address, 32 bits wide for IPv4 and 128 for IPv6.
    pub fn bits(&self) -> Option<u128> {
        match self {
            ParsedAddress::Invalid => None,
            ParsedAddress::Ipv4(v4) => Some(u128::from(u32::from(*v4))),
            ParsedAddress::Ipv6(v6) => Some(u128::from(*v6)),
        }
    }

    pub fn family_name(&self) -> &'static str {
        match self {
            ParsedAddress::Invalid => "invalid",
            ParsedAddress::Ipv4(_) => "IPv4",
            ParsedAddress::Ipv6(_) => "IPv6",
        }
    }
}

impl From<IpAddr> for ParsedAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => ParsedAddress::Ipv4(v4),
            IpAddr::V6(v6) => ParsedAddress::Ipv6(v6),
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedAddress::Invalid => write!(f, "invalid"),
            ParsedAddress::Ipv4(v4) => write!(f, "{v4}"),
            ParsedAddress::Ipv6(v6) => write!(f, "{v6}"),
        }
    }
}

/// Strict dotted-decimal parse: exactly four octets in `0..=255`, nothing else.
///
/// IPv6 forms, including IPv4-mapped ones such as `::ffff:192.168.1.1`,
/// are not IPv4 literals.
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    text.parse::<Ipv4Addr>().ok()
}

/// Colon-hex parse: full, `::`-compressed and dotted-tail forms.
pub fn parse_ipv6(text: &str) -> Option<Ipv6Addr> {
    text.parse::<Ipv6Addr>().ok()
}

/// Classifies a candidate literal.
///
/// Whitespace is never trimmed: `" 10.0.0.1"` is invalid.
pub fn classify(text: Option<&str>) -> ParsedAddress {
    let Some(text) = text else {
        return ParsedAddress::Invalid;
    };

    if let Some(v4) = parse_ipv4(text) {
        return ParsedAddress::Ipv4(v4);
    }

    match parse_ipv6(text) {
        Some(v6) => ParsedAddress::Ipv6(v6),
        None => ParsedAddress::Invalid,
    }
}

/// True iff `text` is a valid literal the given family admits.
///
/// Invalid input is rejected even under [`AddressFamily::Unspecified`].
pub fn matches(text: Option<&str>, family: AddressFamily) -> bool {
    family.admits(&classify(text))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
