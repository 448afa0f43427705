use std::net::IpAddr;

use colored::*;
use srcbind_common::config::Config;
use srcbind_common::error::SourceError;
use srcbind_common::network::address::{self, AddressFamily};
use srcbind_core::network::{interface, route};

use crate::terminal::{colors, print};

pub fn route(destination: &str, cfg: &Config) -> anyhow::Result<bool> {
    print::header("route lookup", cfg.quiet);

    let Some(dest) = address::classify(Some(destination)).ip() else {
        return Err(SourceError::InvalidLiteral {
            literal: destination.to_string(),
        }
        .into());
    };

    let source: IpAddr = route::route_source(dest, cfg.family)?;
    print::aligned_line("destination", 11, dest.to_string().color(colors::ACCENT));
    print::aligned_line("source", 11, source.to_string().color(colors::PRIMARY));

    let peer_family: AddressFamily = if dest.is_ipv4() {
        AddressFamily::Ipv4Only
    } else {
        AddressFamily::Ipv6Only
    };
    let candidates: Vec<String> = interface::local_addresses(peer_family)
        .into_iter()
        .map(|ip| ip.to_string())
        .collect();
    if !candidates.is_empty() {
        print::aligned_line("candidates", 11, candidates.join(", ").color(colors::SEPARATOR));
    }

    Ok(true)
}
