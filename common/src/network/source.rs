//! # Source Selection
//!
//! A [`SourceBinding`] is a local address that has already passed the
//! family policy, so socket code never sees an unchecked literal.

use std::net::{IpAddr, SocketAddr};

use crate::error::SourceError;
use crate::network::address::{self, AddressFamily, ParsedAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceBinding {
    pub address: IpAddr,
    pub family: AddressFamily,
}

impl SourceBinding {
    /// Validates `literal` against `family`.
    pub fn new(literal: &str, family: AddressFamily) -> Result<Self, SourceError> {
        let parsed: ParsedAddress = address::classify(Some(literal));
        let Some(ip) = parsed.ip() else {
            return Err(SourceError::InvalidLiteral {
                literal: literal.to_string(),
            });
        };

        if !family.admits(&parsed) {
            return Err(SourceError::FamilyMismatch {
                address: ip,
                family,
            });
        }

        Ok(Self {
            address: ip,
            family,
        })
    }

    /// Binding with no explicit source: the wildcard of the requested family.
    ///
    /// `None` for `Unspecified`, where the wildcard depends on the peer.
    pub fn wildcard(family: AddressFamily) -> Option<Self> {
        family.unspecified_addr().map(|address| Self { address, family })
    }

    pub fn is_wildcard(&self) -> bool {
        self.address.is_unspecified()
    }

    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.address, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_new_accepts_matching_family() {
        let binding = SourceBinding::new("192.168.1.1", AddressFamily::Ipv4Only).unwrap();
        assert_eq!(binding.address, IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(binding.family, AddressFamily::Ipv4Only);

        let binding = SourceBinding::new("2001:db8::1", AddressFamily::Unspecified).unwrap();
        assert!(binding.address.is_ipv6());
    }

    #[test]
    fn test_new_rejects_invalid_literal() {
        let err = SourceBinding::new(" 10.0.0.1", AddressFamily::Unspecified).unwrap_err();
        assert!(matches!(err, SourceError::InvalidLiteral { ref literal } if literal == " 10.0.0.1"));
        assert!(err.to_string().contains("not a valid IPv4 or IPv6 address"));
    }

    #[test]
    fn test_new_rejects_family_mismatch() {
        let err = SourceBinding::new("::1", AddressFamily::Ipv4Only).unwrap_err();
        assert!(matches!(
            err,
            SourceError::FamilyMismatch {
                family: AddressFamily::Ipv4Only,
                ..
            }
        ));
        assert_eq!(err.to_string(), "::1 cannot be used when restricted to IPv4-only");

        let err = SourceBinding::new("10.0.0.1", AddressFamily::Ipv6Only).unwrap_err();
        assert!(matches!(err, SourceError::FamilyMismatch { .. }));
    }

    #[test]
    fn test_wildcard_and_socket_addr() {
        assert!(SourceBinding::wildcard(AddressFamily::Unspecified).is_none());

        let v6 = SourceBinding::wildcard(AddressFamily::Ipv6Only).unwrap();
        assert!(v6.is_wildcard());
        assert_eq!(
            v6.socket_addr(8080),
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 8080)
        );
    }
}
