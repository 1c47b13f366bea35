//! RunLog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a run log or building a report
#[derive(Debug, Error)]
pub enum RunLogError {
    #[error("Input not found: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
