//! Run statistics and stage tracking for the pipeline driver

use std::fmt;
use std::time::Duration;

/// Stages of one pipeline run
///
/// A run advances through these in order; `Finished` is reached either by
/// normal completion or by the zero-items early exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Run has not begun
    #[default]
    NotStarted,
    /// Fetching raw records from the source
    Loading,
    /// Validating records and constructing items
    Constructing,
    /// Applying the threshold rule to each item
    Processing,
    /// Handing the item sequence back to the source
    Saving,
    /// Run complete, counts reported
    Finished,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Loading => "loading",
            Self::Constructing => "constructing",
            Self::Processing => "processing",
            Self::Saving => "saving",
            Self::Finished => "finished",
        };
        write!(f, "{}", label)
    }
}

/// Outcome counters for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Raw records delivered by the source
    pub records_loaded: usize,
    /// Records skipped because they were invalid or failed construction
    pub records_skipped: usize,
    /// Items successfully constructed
    pub items_constructed: usize,
    /// Items processed successfully
    pub success_count: usize,
    /// Items whose processing failed (the item stays in the save set)
    pub failure_count: usize,
    /// Whether the save step completed successfully
    pub saved: bool,
    /// Stage the run ended in
    pub stage: Stage,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the batch produced zero items and exited early
    pub fn is_empty_batch(&self) -> bool {
        self.items_constructed == 0
    }

    /// Whether anything went wrong that the default exit status hides:
    /// skipped records, per-item failures, or a failed save
    pub fn has_partial_failure(&self) -> bool {
        self.records_skipped > 0
            || self.failure_count > 0
            || (!self.is_empty_batch() && !self.saved)
    }

    /// One-line human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} records loaded, {} skipped, {} items processed ({} succeeded, {} failed), saved: {}",
            self.records_loaded,
            self.records_skipped,
            self.items_constructed,
            self.success_count,
            self.failure_count,
            if self.saved { "yes" } else { "no" }
        )
    }
}
