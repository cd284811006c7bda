//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "userdeck",
    version,
    about = "Terminal user roster with remove/restore, search, and a demo counter"
)]
pub struct Cli {
    /// JSON file replacing the bundled user dataset.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for deterministic id generation and counter draws.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Event loop tick interval in milliseconds.
    #[arg(long = "tick-rate-ms", value_name = "MS")]
    pub tick_rate_ms: Option<u64>,
}
