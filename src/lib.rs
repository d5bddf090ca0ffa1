//! Item Pipeline Library
//!
//! A Rust library for running a small load/process/save pipeline over item
//! records with threshold-based classification.
//!
//! This library provides tools for:
//! - Loading raw item records from a pluggable source (simulated or JSON file)
//! - Validating and constructing items, skipping incomplete records
//! - Classifying each item against a configured threshold and marking it processed
//! - Saving the full ordered item sequence back to the source
//! - Reporting per-run statistics with structured logging throughout

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod data_source;
        pub mod item_processor;
        pub mod pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Item, RawRecord};
pub use app::services::item_processor::{ItemProcessor, ThresholdOutcome};
pub use app::services::pipeline::{Pipeline, RunReport};
pub use config::Config;

/// Result type alias for item pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for item pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Raw record is missing one or more required fields
    #[error("Invalid record: missing required field(s): {missing}")]
    InvalidRecord { missing: String },

    /// Item construction failed validation
    #[error("Item construction error: {message}")]
    ItemConstruction { message: String },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data source load or save error
    #[error("Data source error: {message}")]
    Source { message: String },

    /// Per-item processing error
    #[error("Processing error: {message}")]
    Processing { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid record error from the missing field names
    pub fn invalid_record(missing: &[&str]) -> Self {
        Self::InvalidRecord {
            missing: missing.join(", "),
        }
    }

    /// Create an item construction error
    pub fn item_construction(message: impl Into<String>) -> Self {
        Self::ItemConstruction {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data source error
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
