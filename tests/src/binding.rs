use std::net::{IpAddr, Ipv4Addr};

use srcbind_common::config::Config;
use srcbind_common::error::SourceError;
use srcbind_common::network::address::AddressFamily;
use srcbind_common::network::source::SourceBinding;
use srcbind_core::network::{bind, interface, route};

/// A loopback source passes every layer and ends up as the bound address.
#[tokio::test]
async fn bind_loopback_source_from_config() -> anyhow::Result<()> {
    let cfg = Config {
        family: AddressFamily::Ipv4Only,
        source: Some("127.0.0.1".to_string()),
        ..Config::default()
    };

    let binding: SourceBinding = cfg.source_binding()?.expect("source configured");
    if !interface::local_addresses(AddressFamily::Ipv4Only).contains(&binding.address) {
        eprintln!("Skipping: no IPv4 loopback interface visible.");
        return Ok(());
    }
    interface::ensure_local(&binding)?;

    let socket = bind::bind_udp(&binding, 0).await?;
    assert_eq!(socket.local_addr()?.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    Ok(())
}

#[tokio::test]
async fn tcp_source_connects_to_loopback_listener() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let target = listener.local_addr()?;

    let binding = SourceBinding::new("127.0.0.1", AddressFamily::Unspecified)?;
    let chosen = bind::source_for_peer(Some(&binding), AddressFamily::Unspecified, target.ip())?;
    let socket = bind::bind_tcp(&chosen, 0)?;
    let stream = socket.connect(target).await?;

    let (_accepted, peer) = listener.accept().await?;
    assert_eq!(peer, stream.local_addr()?);
    assert_eq!(peer.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    Ok(())
}

#[test]
fn mismatched_source_is_refused_before_binding() {
    let cfg = Config {
        family: AddressFamily::Ipv6Only,
        source: Some("192.168.1.1".to_string()),
        ..Config::default()
    };
    assert!(matches!(
        cfg.source_binding(),
        Err(SourceError::FamilyMismatch { .. })
    ));

    let cfg = Config {
        source: Some("not.an.ip".to_string()),
        ..Config::default()
    };
    assert!(matches!(
        cfg.source_binding(),
        Err(SourceError::InvalidLiteral { .. })
    ));
}

#[test]
fn route_to_loopback() -> anyhow::Result<()> {
    let dest = IpAddr::V4(Ipv4Addr::LOCALHOST);
    assert_eq!(route::route_source(dest, AddressFamily::Unspecified)?, dest);
    Ok(())
}

/// `-4` with no `--address` binds the IPv4 wildcard.
#[tokio::test]
async fn bind_family_wildcard_without_address() -> anyhow::Result<()> {
    let cfg = Config {
        family: AddressFamily::Ipv4Only,
        ..Config::default()
    };

    let binding: SourceBinding = cfg.bind_source()?.expect("family wildcard");
    interface::ensure_local(&binding)?;

    let socket = bind::bind_udp(&binding, 0).await?;
    let local = socket.local_addr()?;
    assert_eq!(local.ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_ne!(local.port(), 0);

    assert!(Config::default().bind_source()?.is_none());
    Ok(())
}
