//! Source selection by the kernel's routing table.
//!
//! A UDP socket is connected to the destination (no packet leaves the host)
//! and the local address the kernel assigned is read back.

use std::net::{IpAddr, UdpSocket};

use srcbind_common::error::SourceError;
use srcbind_common::network::address::AddressFamily;
use tracing::debug;

const PROBE_PORT: u16 = 53;

/// The local address the kernel would use to reach `destination`.
pub fn route_source(destination: IpAddr, family: AddressFamily) -> Result<IpAddr, SourceError> {
    if !family.admits_ip(destination) {
        return Err(SourceError::FamilyMismatch {
            address: destination,
            family,
        });
    }

    let Some(wildcard) = AddressFamily::of(destination).unspecified_addr() else {
        return Err(SourceError::FamilyMismatch {
            address: destination,
            family,
        });
    };

    let socket = UdpSocket::bind((wildcard, 0)).map_err(|e| SourceError::bind(wildcard, e))?;

    socket
        .connect((destination, PROBE_PORT))
        .map_err(|source| SourceError::Route {
            destination,
            source,
        })?;

    let local: IpAddr = socket
        .local_addr()
        .map_err(|source| SourceError::Route {
            destination,
            source,
        })?
        .ip();

    debug!("route to {destination} leaves from {local}");
    Ok(local)
}
