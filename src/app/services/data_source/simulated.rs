//! In-memory simulated data source
//!
//! Stands in for a future real file or database backend. Loading returns a
//! fixed record set and saving is expressed as log output only; both
//! operations complete immediately.

use crate::Result;
use crate::app::models::{Item, RawRecord};
use tracing::{debug, info};

use super::source::ItemSource;

/// Simulated item source with a fixed, partially-invalid record set
///
/// The built-in data deliberately includes a record missing its `item_id`
/// so the pipeline's skip path is exercised on every default run.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    /// Nominal data source location, used for logging only
    data_source_path: String,
    /// Records returned by `load_raw`
    records: Vec<RawRecord>,
}

impl SimulatedSource {
    /// Create a simulated source with the built-in record set
    pub fn new(data_source_path: impl Into<String>) -> Self {
        let data_source_path = data_source_path.into();
        info!("SimulatedSource initialized for source: {}", data_source_path);
        Self {
            data_source_path,
            records: Self::builtin_records(),
        }
    }

    /// Create a simulated source that returns the given records
    pub fn with_records(data_source_path: impl Into<String>, records: Vec<RawRecord>) -> Self {
        Self {
            data_source_path: data_source_path.into(),
            records,
        }
    }

    /// The fixed record set shipped with the simulated source
    fn builtin_records() -> Vec<RawRecord> {
        vec![
            RawRecord::new(1, "Gadget Alpha", 150.75),
            RawRecord::new(2, "Widget Beta", 85.0),
            RawRecord::new(3, "Thingamajig Gamma", 210.5),
            RawRecord::new(4, "Doohickey Delta", 55.2),
            // Missing item_id: skipped during construction
            RawRecord {
                item_id: None,
                name: Some("Invalid Item".to_string()),
                value: Some(10.0),
            },
        ]
    }
}

impl ItemSource for SimulatedSource {
    fn load_raw(&self) -> Result<Vec<RawRecord>> {
        info!(
            "Simulating loading items from {}...",
            self.data_source_path
        );
        let records = self.records.clone();
        info!("Loaded {} raw records", records.len());
        Ok(records)
    }

    fn save_all(&self, items: &[Item]) -> Result<()> {
        info!(
            "Simulating saving {} items to {}...",
            items.len(),
            self.data_source_path
        );
        for item in items {
            debug!("Saving item: {}", item);
        }
        info!("Finished simulating save operation");
        Ok(())
    }
}
