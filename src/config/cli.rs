//! Command-line argument parsing

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(name = "wifi-signal-monitor", version, author)]
#[clap(about = "Print the signal strength of the wireless station link once per interval")]
pub struct CliArgs {
    /// Only monitor the station interface with this name
    #[clap(short, long)]
    pub interface: Option<String>,

    /// Seconds between two station info fetches
    #[clap(short = 'n', long, default_value = "1")]
    pub interval: f64,

    /// Stop after this many fetches instead of running until interrupted
    #[clap(short, long)]
    pub count: Option<u64>,

    /// Print each station record as a JSON object
    #[clap(long)]
    pub json: bool,
}
