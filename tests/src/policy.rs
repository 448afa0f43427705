use srcbind_common::network::address::{self, AddressFamily, ParsedAddress};
use srcbind_core::{batch, suite};

const FAMILIES: [AddressFamily; 3] = [
    AddressFamily::Unspecified,
    AddressFamily::Ipv4Only,
    AddressFamily::Ipv6Only,
];

/// The end-to-end scenarios a dialer relies on.
#[test]
fn policy_scenarios() {
    assert!(address::matches(Some("192.168.1.1"), AddressFamily::Ipv4Only));
    assert!(!address::matches(Some("::1"), AddressFamily::Ipv4Only));
    assert!(!address::matches(Some("not.an.ip"), AddressFamily::Unspecified));
    assert!(!address::matches(Some("256.1.1.1"), AddressFamily::Unspecified));
    assert!(matches!(address::classify(Some("fe80::1")), ParsedAddress::Ipv6(_)));
    assert_eq!(address::classify(Some("1.2.3.4.5")), ParsedAddress::Invalid);
}

#[test]
fn every_ipv4_octet_value() {
    for octet in 0..=255u16 {
        let text = format!("10.{octet}.0.{octet}");
        assert!(
            matches!(address::classify(Some(text.as_str())), ParsedAddress::Ipv4(_)),
            "{text}"
        );
    }
    for octet in [256u16, 300, 999, 1000] {
        let text = format!("10.0.0.{octet}");
        assert_eq!(address::classify(Some(text.as_str())), ParsedAddress::Invalid, "{text}");
    }
}

#[test]
fn whitespace_is_never_trimmed() {
    for valid in ["192.168.1.1", "::1", "2001:db8::1"] {
        for padded in [
            format!(" {valid}"),
            format!("{valid} "),
            format!("\n{valid}"),
            format!("{valid}\t"),
        ] {
            assert_eq!(address::classify(Some(padded.as_str())), ParsedAddress::Invalid, "{padded:?}");
            for family in FAMILIES {
                assert!(!address::matches(Some(padded.as_str()), family));
            }
        }
    }
}

#[test]
fn absent_address_never_matches() {
    for family in FAMILIES {
        assert!(!address::matches(None, family), "{family}");
    }
}

#[test]
fn batch_agrees_with_single_checks() {
    let literals = [
        "192.168.1.1",
        "2001:db8::1",
        "::ffff:192.168.1.1",
        "gggg::1",
        "",
        "1.2.3",
    ];
    for family in FAMILIES {
        let verdicts = batch::validate_all(&literals, family);
        for verdict in verdicts {
            assert_eq!(
                verdict.accepted,
                address::matches(Some(verdict.literal.as_str()), family),
                "{} under {family}",
                verdict.literal
            );
        }
    }
}

#[test]
fn builtin_suite_is_green() {
    let report = suite::run();
    assert!(report.is_success(), "{} check(s) failed", report.failed());
    assert!(report.passed() > 40);
}
