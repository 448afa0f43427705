use std::io;
use std::net::IpAddr;

use thiserror::Error;

use crate::network::address::AddressFamily;

/// Reasons a source address cannot be used for an outbound socket.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The text is not an IPv4 or IPv6 literal.
    #[error("'{literal}' is not a valid IPv4 or IPv6 address")]
    InvalidLiteral { literal: String },
    /// The address is valid but belongs to the other family.
    #[error("{address} cannot be used when restricted to {family}")]
    FamilyMismatch { address: IpAddr, family: AddressFamily },
    /// No local interface carries the address.
    #[error("{address} is not assigned to any local interface")]
    NotLocal { address: IpAddr },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: IpAddr,
        #[source]
        source: io::Error,
    },
    /// The kernel could not pick a route towards the destination.
    #[error("no route to {destination}: {source}")]
    Route {
        destination: IpAddr,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn bind(address: IpAddr, source: io::Error) -> Self {
        SourceError::Bind { address, source }
    }
}
