use std::net::SocketAddr;

use anyhow::Context;
use colored::*;
use srcbind_common::config::Config;
use srcbind_common::network::source::SourceBinding;
use srcbind_common::{info, success};
use srcbind_core::network::{bind, interface};

use crate::terminal::{colors, print};

pub async fn bind(port: u16, tcp: bool, cfg: &Config) -> anyhow::Result<bool> {
    print::header("binding source address", cfg.quiet);

    let binding: SourceBinding = cfg
        .bind_source()?
        .context("no source address given, pass --address or restrict with -4/-6")?;
    info!("Using {} under {} policy", binding.address, binding.family);

    interface::ensure_local(&binding)?;

    let local: SocketAddr = if tcp {
        bind::bind_tcp(&binding, port)?.local_addr()?
    } else {
        bind::bind_udp(&binding, port).await?.local_addr()?
    };

    let proto: &str = if tcp { "TCP" } else { "UDP" };
    print::aligned_line(proto, 3, local.to_string().color(colors::PRIMARY));
    success!("{proto} socket bound to {local}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcbind_common::network::address::AddressFamily;

    #[tokio::test]
    async fn test_bind_with_family_only() {
        let cfg = Config {
            family: AddressFamily::Ipv4Only,
            quiet: true,
            ..Config::default()
        };
        assert!(bind(0, false, &cfg).await.unwrap());
        assert!(bind(0, true, &cfg).await.unwrap());
    }

    #[tokio::test]
    async fn test_bind_without_address_or_family_fails() {
        let cfg = Config {
            quiet: true,
            ..Config::default()
        };
        let err = bind(0, false, &cfg).await.unwrap_err();
        assert!(err.to_string().contains("no source address given"));
    }

    #[tokio::test]
    async fn test_bind_refuses_mismatched_address() {
        let cfg = Config {
            family: AddressFamily::Ipv6Only,
            source: Some("127.0.0.1".to_string()),
            quiet: true,
            ..Config::default()
        };
        assert!(bind(0, false, &cfg).await.is_err());
    }
}
