use colored::*;
use srcbind_common::network::address::ParsedAddress;

use crate::terminal::colors;

/// Family tag plus canonical text, coloured per family.
pub fn parsed_to_value(parsed: &ParsedAddress) -> ColoredString {
    let family: &str = parsed.family_name();
    match parsed {
        ParsedAddress::Invalid => family.color(colors::REJECTED).bold(),
        ParsedAddress::Ipv4(v4) => format!("{family} {v4}").color(colors::IPV4_ADDR),
        ParsedAddress::Ipv6(v6) => match v6.to_ipv4_mapped() {
            Some(mapped) => format!("{family} {v6} (maps {mapped})").color(colors::IPV6_ADDR),
            None => format!("{family} {v6}").color(colors::IPV6_ADDR),
        },
    }
}

pub fn verdict_to_value(accepted: bool) -> ColoredString {
    if accepted {
        "accepted".green().bold()
    } else {
        "rejected".color(colors::REJECTED).bold()
    }
}

/// Quoted, escaped form of a literal, so whitespace stays visible.
pub fn literal_key(literal: &str) -> String {
    format!("{literal:?}")
}

pub fn key_width<'a>(keys: impl IntoIterator<Item = &'a str>) -> usize {
    keys.into_iter().map(|k| k.chars().count()).max().unwrap_or(0)
}
