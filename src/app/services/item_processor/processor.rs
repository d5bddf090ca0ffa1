//! Threshold-based item processor

use crate::app::models::Item;
use crate::{Error, Result};
use std::fmt;
use tracing::{debug, info};

/// Informational outcome of the threshold comparison
///
/// The outcome is recorded and logged but has no effect on what happens to
/// the item: it is marked processed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdOutcome {
    /// Item value is strictly greater than the threshold
    Exceeds,
    /// Item value is less than or equal to the threshold
    Within,
}

impl fmt::Display for ThresholdOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exceeds => write!(f, "exceeds threshold"),
            Self::Within => write!(f, "within threshold"),
        }
    }
}

/// Processes individual items against a configured threshold
///
/// The threshold is fixed at construction and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ItemProcessor {
    threshold: i32,
}

impl ItemProcessor {
    /// Create a new item processor with the given threshold
    pub fn new(threshold: i32) -> Self {
        info!("ItemProcessor initialized with threshold: {}", threshold);
        Self { threshold }
    }

    /// The configured threshold
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Process a single item in place
    ///
    /// Compares the item's value against the threshold with a strict
    /// greater-than test, then unconditionally marks the item processed.
    /// Construction deliberately does not range-check values, so a
    /// non-finite value surfaces here: it fails processing and leaves the
    /// item unmutated.
    pub fn process_item(&self, item: &mut Item) -> Result<ThresholdOutcome> {
        debug!(
            "Processing item ID: {}, Name: '{}', Value: {:.2}",
            item.item_id, item.name, item.value
        );

        if !item.value.is_finite() {
            return Err(Error::processing(format!(
                "Item '{}' (ID: {}) has a non-finite value and cannot be processed",
                item.name, item.item_id
            )));
        }

        let outcome = if item.value > f64::from(self.threshold) {
            ThresholdOutcome::Exceeds
        } else {
            ThresholdOutcome::Within
        };

        info!(
            "Item '{}' (ID: {}) value {:.2} {} {}",
            item.name, item.item_id, item.value, outcome, self.threshold
        );

        item.mark_processed();
        Ok(outcome)
    }
}
