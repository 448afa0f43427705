use rayon::prelude::*;
use srcbind_common::network::address::{self, AddressFamily, ParsedAddress};

/// Outcome of checking one candidate literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub literal: String,
    pub parsed: ParsedAddress,
    pub accepted: bool,
}

/// Classifies every literal against `family` in parallel.
///
/// Results come back in input order.
pub fn validate_all<S>(literals: &[S], family: AddressFamily) -> Vec<Verdict>
where
    S: AsRef<str> + Sync,
{
    literals
        .par_iter()
        .map(|literal| {
            let literal: &str = literal.as_ref();
            let parsed: ParsedAddress = address::classify(Some(literal));
            Verdict {
                literal: literal.to_string(),
                parsed,
                accepted: family.admits(&parsed),
            }
        })
        .collect()
}

/// Counts of `(accepted, rejected)` verdicts.
pub fn summary(verdicts: &[Verdict]) -> (usize, usize) {
    let accepted: usize = verdicts.iter().filter(|v| v.accepted).count();
    (accepted, verdicts.len() - accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_all_keeps_order() {
        let literals = ["10.0.0.1", "::1", "bogus", "256.0.0.1", "fe80::1"];
        let verdicts = validate_all(&literals, AddressFamily::Ipv6Only);

        let names: Vec<&str> = verdicts.iter().map(|v| v.literal.as_str()).collect();
        assert_eq!(names, literals);

        let accepted: Vec<bool> = verdicts.iter().map(|v| v.accepted).collect();
        assert_eq!(accepted, [false, true, false, false, true]);

        assert!(matches!(verdicts[0].parsed, ParsedAddress::Ipv4(_)));
        assert_eq!(verdicts[2].parsed, ParsedAddress::Invalid);
        assert_eq!(summary(&verdicts), (2, 3));
    }

    #[test]
    fn test_validate_all_large_batch() {
        let literals: Vec<String> = (0..=300u32).map(|n| format!("10.0.{}.{}", n / 256, n % 256)).collect();
        let verdicts = validate_all(&literals, AddressFamily::Unspecified);
        assert_eq!(verdicts.len(), 301);
        assert!(verdicts.iter().all(|v| v.accepted));
        assert_eq!(verdicts[257].literal, "10.0.1.1");
    }

    #[test]
    fn test_empty_batch() {
        let literals: [&str; 0] = [];
        assert!(validate_all(&literals, AddressFamily::Unspecified).is_empty());
        assert_eq!(summary(&[]), (0, 0));
    }
}
