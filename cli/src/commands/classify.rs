use srcbind_common::config::Config;
use srcbind_common::network::address::{self, ParsedAddress};

use crate::terminal::{format, print};

pub fn classify(addresses: &[String], cfg: &Config) -> anyhow::Result<bool> {
    print::header("classification", cfg.quiet);

    let keys: Vec<String> = addresses.iter().map(|l| format::literal_key(l)).collect();
    let width: usize = format::key_width(keys.iter().map(String::as_str));
    let mut all_valid = true;

    for (literal, key) in addresses.iter().zip(&keys) {
        let parsed: ParsedAddress = address::classify(Some(literal.as_str()));
        all_valid &= parsed.is_valid();
        print::aligned_line(key, width, format::parsed_to_value(&parsed));
    }

    Ok(all_valid)
}
