pub mod bind;
pub mod check;
pub mod classify;
pub mod route;
pub mod suite;

use clap::{Parser, Subcommand};
use srcbind_common::network::address::AddressFamily;

#[derive(Parser)]
#[command(name = "srcbind")]
#[command(about = "Validate and bind outbound source addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Restrict to IPv4 addresses
    #[arg(short = '4', long = "ipv4", global = true, conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Restrict to IPv6 addresses
    #[arg(short = '6', long = "ipv6", global = true)]
    pub ipv6: bool,

    /// Only print results and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the family and canonical form of each literal
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Accept or reject each literal under the selected family
    #[command(alias = "k")]
    Check {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Bind a socket to a local source address
    #[command(alias = "b")]
    Bind {
        /// Source address to bind to, the family wildcard when omitted
        #[arg(short, long)]
        address: Option<String>,
        /// Local port, 0 lets the system choose
        #[arg(short, long, default_value_t = 0)]
        port: u16,
        /// Bind a TCP socket instead of UDP
        #[arg(long)]
        tcp: bool,
    },
    /// Show the source address used to reach a destination
    #[command(alias = "r")]
    Route { destination: String },
    /// Run the built-in validation suite
    #[command(alias = "s")]
    Suite,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::from_flags(self.ipv4, self.ipv6)
    }
}
