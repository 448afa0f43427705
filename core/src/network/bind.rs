use std::net::{IpAddr, SocketAddr};

use srcbind_common::error::SourceError;
use srcbind_common::network::address::AddressFamily;
use srcbind_common::network::source::SourceBinding;
use tokio::net::{TcpSocket, UdpSocket};
use tracing::debug;

/// Picks the local address to dial `peer` from.
///
/// The peer must fit `family`, and an explicit source must share the peer's
/// family. Without a source the wildcard of the peer's family is used.
pub fn source_for_peer(
    source: Option<&SourceBinding>,
    family: AddressFamily,
    peer: IpAddr,
) -> Result<SourceBinding, SourceError> {
    if !family.admits_ip(peer) {
        return Err(SourceError::FamilyMismatch {
            address: peer,
            family,
        });
    }

    let peer_family: AddressFamily = AddressFamily::of(peer);

    match source {
        Some(binding) if peer_family.admits_ip(binding.address) => Ok(*binding),
        Some(binding) => Err(SourceError::FamilyMismatch {
            address: binding.address,
            family: peer_family,
        }),
        None => match peer_family.unspecified_addr() {
            Some(address) => Ok(SourceBinding { address, family }),
            None => Err(SourceError::FamilyMismatch {
                address: peer,
                family,
            }),
        },
    }
}

pub async fn bind_udp(binding: &SourceBinding, port: u16) -> Result<UdpSocket, SourceError> {
    let addr: SocketAddr = binding.socket_addr(port);
    let socket = UdpSocket::bind(addr)
        .await
        .map_err(|e| SourceError::bind(binding.address, e))?;

    debug!("udp socket bound to {addr}");
    Ok(socket)
}

/// Returns a TCP socket bound to the source, ready for `connect`.
pub fn bind_tcp(binding: &SourceBinding, port: u16) -> Result<TcpSocket, SourceError> {
    let addr: SocketAddr = binding.socket_addr(port);
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(|e| SourceError::bind(binding.address, e))?;

    socket
        .bind(addr)
        .map_err(|e| SourceError::bind(binding.address, e))?;

    debug!("tcp socket bound to {addr}");
    Ok(socket)
}
