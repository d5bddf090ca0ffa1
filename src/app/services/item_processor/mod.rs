//! Item processing module
//!
//! This module applies the per-item threshold rule. The comparison against
//! the configured threshold never changes control flow: both outcomes lead
//! to the same mutation (the item is marked processed), differing only in
//! which informational outcome is recorded.

pub mod processor;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{ItemProcessor, ThresholdOutcome};
