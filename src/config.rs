//! Configuration management and validation.
//!
//! Provides the configuration structure for pipeline parameters: the data
//! source path, the processing threshold, and the logging level. Values are
//! constant for the process lifetime; there is no global mutable state, the
//! configuration is threaded through the pipeline driver's construction.

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_LOG_LEVEL, DEFAULT_THRESHOLD, LOG_LEVELS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the item data source
    pub data_path: PathBuf,

    /// Processing threshold: items with a value strictly above it are
    /// reported as exceeding, all others as within
    pub threshold: i32,

    /// Logging level for the run (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            threshold: DEFAULT_THRESHOLD,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults, so a partial configuration
    /// file is accepted.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::serialization(
                format!("Failed to parse config file '{}'", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Create configuration with a custom data path
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Create configuration with a custom threshold
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create configuration with a custom logging level
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(Error::configuration("Data path cannot be empty"));
        }

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
