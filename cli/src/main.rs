mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, bind, check, classify, route, suite};
use srcbind_common::config::Config;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let mut cfg = Config {
        family: commands.family(),
        quiet: commands.quiet,
        no_color: commands.no_color,
        ..Config::default()
    };

    logging::init_logging(&cfg);

    let ok: bool = match commands.command {
        Commands::Classify { addresses } => classify::classify(&addresses, &cfg)?,
        Commands::Check { addresses } => check::check(&addresses, &cfg)?,
        Commands::Bind { address, port, tcp } => {
            cfg.source = address;
            bind::bind(port, tcp, &cfg).await?
        }
        Commands::Route { destination } => route::route(&destination, &cfg)?,
        Commands::Suite => suite::suite(&cfg)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
