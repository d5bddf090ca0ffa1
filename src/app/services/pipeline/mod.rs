//! Pipeline orchestration module
//!
//! This module sequences one end-to-end pipeline run: load raw records from
//! the source, construct and validate items, process each item against the
//! threshold, save the full ordered sequence back, and report final counts.
//!
//! # Processing Pipeline
//!
//! A run moves through fixed stages:
//!
//! 1. **Loading**: fetch the ordered raw record sequence from the source
//! 2. **Constructing**: build items, skipping (and counting) invalid records
//! 3. **Processing**: apply the threshold rule and mark each item processed
//! 4. **Saving**: hand the full ordered item sequence back to the source
//!
//! A batch that constructs zero items ends the run early after the
//! constructing stage; that is a normal, non-error termination. There is no
//! retry or resume: each run is one-shot, and final counts are reported
//! whenever the run got past loading, regardless of per-step outcomes.

pub mod driver;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use driver::Pipeline;
pub use stats::{RunReport, Stage};
