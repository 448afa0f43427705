use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};
use srcbind_common::error::SourceError;
use srcbind_common::network::address::AddressFamily;
use srcbind_common::network::source::SourceBinding;
use tracing::debug;

/// Addresses assigned to interfaces that are up, limited to `family`.
pub fn local_addresses(family: AddressFamily) -> Vec<IpAddr> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces()
        .into_iter()
        .filter(|iface| iface.is_up() && !iface.ips.is_empty())
        .collect();

    debug!("{} usable interface(s) found", interfaces.len());
    addresses_of(&interfaces, family)
}

fn addresses_of(interfaces: &[NetworkInterface], family: AddressFamily) -> Vec<IpAddr> {
    let mut addrs: Vec<IpAddr> = interfaces
        .iter()
        .flat_map(|iface| iface.ips.iter().map(|net| net.ip()))
        .filter(|ip| family.admits_ip(*ip))
        .collect();

    addrs.sort();
    addrs.dedup();
    addrs
}

/// Fails with [`SourceError::NotLocal`] unless the binding is a wildcard or
/// an address some local interface owns.
pub fn ensure_local(binding: &SourceBinding) -> Result<(), SourceError> {
    if binding.is_wildcard() {
        return Ok(());
    }

    let local: Vec<IpAddr> = local_addresses(binding.family);
    check_assigned(binding.address, &local)
}

fn check_assigned(address: IpAddr, local: &[IpAddr]) -> Result<(), SourceError> {
    if local.contains(&address) {
        Ok(())
    } else {
        Err(SourceError::NotLocal { address })
    }
}
