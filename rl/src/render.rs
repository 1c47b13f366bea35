//! Progress bar rendering

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RunLogError;

/// Markers used to draw the bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    /// Flag at the head of the bar
    pub start: String,
    /// One per block still to run
    pub pending: String,
    /// One per block already run
    pub completed: String,
    /// Current position
    pub runner: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            start: "\u{1F3C1}".to_string(),
            pending: "\u{26F3}\u{FE0F}".to_string(),
            completed: "\u{1F7E9}".to_string(),
            runner: "\u{1F3C3}".to_string(),
        }
    }
}

/// Immutable rendering parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    target_distance: u32,
    num_blocks: u32,
    symbols: Symbols,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            target_distance: crate::DEFAULT_TARGET_DISTANCE,
            num_blocks: crate::DEFAULT_NUM_BLOCKS,
            symbols: Symbols::default(),
        }
    }
}

impl ProgressConfig {
    /// Create a config, rejecting values that would give a zero block size
    pub fn new(target_distance: u32, num_blocks: u32, symbols: Symbols) -> Result<Self, RunLogError> {
        if num_blocks == 0 {
            return Err(RunLogError::InvalidConfig(
                "num-blocks must be greater than zero".to_string(),
            ));
        }
        if target_distance / num_blocks == 0 {
            return Err(RunLogError::InvalidConfig(format!(
                "target-distance ({}) must be at least num-blocks ({})",
                target_distance, num_blocks
            )));
        }
        Ok(Self {
            target_distance,
            num_blocks,
            symbols,
        })
    }

    pub fn target_distance(&self) -> u32 {
        self.target_distance
    }

    pub fn num_blocks(&self) -> u32 {
        self.num_blocks
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Distance covered by one block; any remainder of the division is dropped
    pub fn block_size(&self) -> u32 {
        self.target_distance / self.num_blocks
    }
}

/// Where a truncated distance lands on the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Target met or exceeded
    Done,
    /// Still running; `pending + completed == num_blocks`
    Bar { pending: u32, completed: u32 },
}

impl Progress {
    pub fn compute(truncated: i64, config: &ProgressConfig) -> Self {
        if truncated >= i64::from(config.target_distance) {
            debug!("Progress::compute: {} reached target {}", truncated, config.target_distance);
            return Progress::Done;
        }

        // Negative totals or rounding past the last block must not push
        // the pending count below zero.
        let blocks = truncated / i64::from(config.block_size());
        let completed = blocks.clamp(0, i64::from(config.num_blocks)) as u32;
        let pending = config.num_blocks - completed;

        debug!(
            "Progress::compute: truncated={} block_size={} completed={} pending={}",
            truncated,
            config.block_size(),
            completed,
            pending
        );
        Progress::Bar { pending, completed }
    }

    /// Draw the bar, or the done line; neither carries a trailing newline
    pub fn render(&self, symbols: &Symbols) -> String {
        match *self {
            Progress::Done => format!("DONE! {}{}{}", symbols.start, symbols.runner, symbols.start),
            Progress::Bar { pending, completed } => {
                let mut bar = String::with_capacity(
                    symbols.start.len()
                        + symbols.runner.len()
                        + symbols.pending.len() * pending as usize
                        + symbols.completed.len() * completed as usize,
                );
                bar.push_str(&symbols.start);
                bar.push_str(&symbols.pending.repeat(pending as usize));
                bar.push_str(&symbols.runner);
                bar.push_str(&symbols.completed.repeat(completed as usize));
                bar
            }
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Progress::Done)
    }
}
