//! Data source module for item records
//!
//! This module provides the source abstraction the pipeline depends on for
//! retrieval and persistence of item data, plus its two implementations.
//!
//! # Architecture
//!
//! - [`source`] - The `ItemSource` trait the pipeline driver is written against
//! - [`simulated`] - In-memory source with a fixed record set and log-only persistence
//! - [`json_file`] - File-backed source reading and writing a JSON array
//!
//! Order is significant everywhere: sources deliver records in a fixed order
//! and receive the full ordered item sequence back on save. Sources never
//! mutate the items they are asked to save.
//!
//! The trait boundary is the only place real I/O lives. The pipeline core
//! stays synchronous and single-threaded regardless of the source behind it.

pub mod json_file;
pub mod simulated;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use json_file::JsonFileSource;
pub use simulated::SimulatedSource;
pub use source::ItemSource;
