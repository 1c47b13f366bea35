//! RunLog configuration types and loading

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{ProgressConfig, Symbols};

/// Main RunLog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run log to read
    pub input: PathBuf,

    /// Goal distance
    #[serde(rename = "target-distance")]
    pub target_distance: u32,

    /// Resolution of the bar
    #[serde(rename = "num-blocks")]
    pub num_blocks: u32,

    /// Bar markers
    pub symbols: Symbols,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(crate::DEFAULT_INPUT),
            target_distance: crate::DEFAULT_TARGET_DISTANCE,
            num_blocks: crate::DEFAULT_NUM_BLOCKS,
            symbols: Symbols::default(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: .runlog.yml
        let local_config = PathBuf::from(".runlog.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {:#}", local_config.display(), e),
            }
        }

        // User config: ~/.config/runlog/runlog.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("runlog").join("runlog.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {:#}", user_config.display(), e),
                }
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validated rendering parameters
    pub fn progress(&self) -> Result<ProgressConfig> {
        let progress = ProgressConfig::new(self.target_distance, self.num_blocks, self.symbols.clone())?;
        Ok(progress)
    }
}
