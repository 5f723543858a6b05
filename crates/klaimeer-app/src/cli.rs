use std::path::PathBuf;

use clap::Parser;

/// Klaimeer: a rotating gradient globe with animated market figures.
#[derive(Parser, Debug)]
#[command(name = "klaimeer", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug` or `klaimeer=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Fixed seed for the point cloud.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
