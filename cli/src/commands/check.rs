use colored::*;
use srcbind_common::config::Config;
use srcbind_common::{success, warn};
use srcbind_core::batch::{self, Verdict};

use crate::terminal::{colors, format, print};

pub fn check(addresses: &[String], cfg: &Config) -> anyhow::Result<bool> {
    print::header(&format!("checking for {}", cfg.family), cfg.quiet);

    let verdicts: Vec<Verdict> = batch::validate_all(addresses, cfg.family);
    let keys: Vec<String> = addresses.iter().map(|l| format::literal_key(l)).collect();
    let width: usize = format::key_width(keys.iter().map(String::as_str));

    for (verdict, key) in verdicts.iter().zip(&keys) {
        let value: String = format!(
            "{} {}",
            format::verdict_to_value(verdict.accepted),
            format!("({})", format::parsed_to_value(&verdict.parsed)).color(colors::SEPARATOR)
        );
        print::aligned_line(key, width, value);
    }

    let (accepted, rejected) = batch::summary(&verdicts);
    if rejected == 0 {
        success!("{accepted} of {} address(es) accepted", verdicts.len());
    } else {
        warn!("{rejected} of {} address(es) rejected", verdicts.len());
    }

    Ok(rejected == 0)
}
