//! JSON file-backed data source
//!
//! Reads raw records from a JSON array on disk and writes the finished item
//! sequence back as pretty-printed JSON. This is the only component in the
//! crate that performs real I/O.

use crate::app::models::{Item, RawRecord};
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use super::source::ItemSource;

/// Item source backed by a JSON file
///
/// The file must contain a JSON array of record objects. Keys absent from a
/// record object deserialize to `None` and are handled by the pipeline's
/// skip logic, so intentionally invalid records are tolerated here.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a JSON file source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("JsonFileSource initialized for file: {}", path.display());
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ItemSource for JsonFileSource {
    fn load_raw(&self) -> Result<Vec<RawRecord>> {
        info!("Loading items from {}...", self.path.display());

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to read data file '{}'", self.path.display()),
                e,
            )
        })?;

        let records: Vec<RawRecord> = serde_json::from_str(&contents).map_err(|e| {
            Error::serialization(
                format!("Failed to parse data file '{}'", self.path.display()),
                e,
            )
        })?;

        info!("Loaded {} raw records", records.len());
        Ok(records)
    }

    fn save_all(&self, items: &[Item]) -> Result<()> {
        info!(
            "Saving {} items to {}...",
            items.len(),
            self.path.display()
        );

        for item in items {
            debug!("Saving item: {}", item);
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| Error::serialization("Failed to serialize items", e))?;

        fs::write(&self.path, json).map_err(|e| {
            Error::io(
                format!("Failed to write data file '{}'", self.path.display()),
                e,
            )
        })?;

        info!("Finished save operation");
        Ok(())
    }
}
