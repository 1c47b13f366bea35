//! RunLog - mileage progress bar
//!
//! CLI entry point: sums the run log and prints progress toward the goal.

use clap::Parser;
use eyre::{Context, Result};
use log::{LevelFilter, debug};

use runlog::cli::Cli;
use runlog::config::Config;
use runlog::report;

fn parse_level(s: &str) -> LevelFilter {
    match s.to_uppercase().as_str() {
        "TRACE" => LevelFilter::Trace,
        "DEBUG" => LevelFilter::Debug,
        "INFO" => LevelFilter::Info,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "ERROR" => LevelFilter::Error,
        "OFF" => LevelFilter::Off,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            LevelFilter::Warn
        }
    }
}

/// Install the logger. Returns true when neither `--log-level` nor
/// `RUST_LOG` chose a level, leaving it to the config file.
fn setup_logging(cli_log_level: Option<&str>) -> Result<bool> {
    // Priority: --log-level > RUST_LOG > config file > WARN
    let mut builder = env_logger::Builder::from_default_env();
    let from_config = match cli_log_level {
        Some(level) => {
            builder.filter_level(parse_level(level));
            false
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            // Let everything through the logger; the global max level gates it
            builder.filter_level(LevelFilter::Trace);
            true
        }
        None => false,
    };
    builder.try_init()?;
    if from_config {
        log::set_max_level(LevelFilter::Warn);
    }
    Ok(from_config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level_from_config = setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if level_from_config && let Some(level) = config.log_level.as_deref() {
        log::set_max_level(parse_level(level));
    }

    let progress = config.progress().context("Invalid progress settings")?;
    let input = cli.input.unwrap_or(config.input);
    debug!("main: input={} progress={:?}", input.display(), progress);

    let mut stdout = std::io::stdout().lock();
    report::run(&input, &progress, &mut stdout).context(format!("Failed to report on {}", input.display()))?;

    Ok(())
}
