//! Application constants for the item pipeline
//!
//! This module contains default configuration values and status labels
//! used throughout the item pipeline application.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default path to the (simulated) item data file
pub const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Default processing threshold used by the item processor
pub const DEFAULT_THRESHOLD: i32 = 100;

/// Default logging level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted logging levels, in increasing order of severity
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Item Status Labels
// =============================================================================

/// Status labels rendered in item descriptions
pub mod status {
    /// Item has been marked processed by the pipeline
    pub const PROCESSED: &str = "Processed";

    /// Item has not been processed yet
    pub const PENDING: &str = "Pending";
}

// =============================================================================
// Record Field Names
// =============================================================================

/// Required fields of a raw item record
pub mod fields {
    /// Integer identifier field
    pub const ITEM_ID: &str = "item_id";

    /// Text label field
    pub const NAME: &str = "name";

    /// Numeric measure field
    pub const VALUE: &str = "value";
}
