use std::path::PathBuf;

use clap::Parser;

/// Courier — one window for all your messaging accounts.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Data directory override (account store and browsing partitions).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
