use colored::*;
use srcbind_common::config::Config;
use srcbind_common::{info, warn};
use srcbind_core::suite::{self, SuiteReport};

use crate::sprint;
use crate::terminal::print;

pub fn suite(cfg: &Config) -> anyhow::Result<bool> {
    print::header("source binding validation", cfg.quiet);
    info!("Running source binding validation checks...");

    let report: SuiteReport = suite::run();

    let mut group: &str = "";
    for outcome in &report.outcomes {
        if !cfg.quiet && outcome.group != group && !group.is_empty() {
            sprint!();
        }
        group = outcome.group;
        if cfg.quiet && outcome.passed {
            continue;
        }
        print::check_line(outcome.passed, outcome.group, outcome.description);
    }

    sprint!();
    print::fat_separator();
    if report.is_success() {
        let msg: String = format!("All {} validation checks passed!", report.passed());
        print::print(&format!("{}", msg.green().bold()));
    } else {
        warn!(
            "{} checks passed, {} checks FAILED",
            report.passed(),
            report.failed()
        );
    }
    print::fat_separator();

    Ok(report.is_success())
}
