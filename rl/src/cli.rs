//! CLI argument parsing for runlog

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rl")]
#[command(author, version, about = "Total up logged runs and show progress toward the mileage goal", long_about = None)]
pub struct Cli {
    /// Run log to read (default: runs.txt)
    pub input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,
}
