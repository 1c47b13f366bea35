//! RunLog - mileage progress from a flat log of runs
//!
//! Reads whitespace-separated distances from a text file, sums them, and draws
//! an emoji progress bar toward a fixed target distance.
//!
//! # Pipeline
//!
//! ```text
//! runs.txt ──> tally (sum until first non-number) ──> truncate ──> render
//! ```
//!
//! # Example
//!
//! ```ignore
//! use runlog::{ProgressConfig, report};
//!
//! let config = ProgressConfig::default();
//! let report = report::run("runs.txt", &config, &mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod tally;

pub use error::RunLogError;
pub use render::{Progress, ProgressConfig, Symbols};
pub use report::Report;
pub use tally::{Tally, read_tally, sum_distances};

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "runs.txt";

/// Default goal distance
pub const DEFAULT_TARGET_DISTANCE: u32 = 1000;

/// Default number of blocks in the bar
pub const DEFAULT_NUM_BLOCKS: u32 = 100;
