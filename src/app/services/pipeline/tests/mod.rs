//! Tests for the pipeline driver and run reporting


use crate::app::models::{Item, RawRecord};
use crate::app::services::data_source::ItemSource;
use crate::{Error, Result};
use std::cell::RefCell;

/// In-memory source that records what the pipeline asked it to save
pub struct MockSource {
    records: Vec<RawRecord>,
    fail_load: bool,
    fail_save: bool,
    pub saved: RefCell<Option<Vec<Item>>>,
}

impl MockSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            fail_load: false,
            fail_save: false,
            saved: RefCell::new(None),
        }
    }

    pub fn failing_load() -> Self {
        let mut source = Self::new(vec![]);
        source.fail_load = true;
        source
    }

    pub fn with_failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }
}

impl ItemSource for MockSource {
    fn load_raw(&self) -> Result<Vec<RawRecord>> {
        if self.fail_load {
            return Err(Error::source("Mock load failure"));
        }
        Ok(self.records.clone())
    }

    fn save_all(&self, items: &[Item]) -> Result<()> {
        if self.fail_save {
            return Err(Error::source("Mock save failure"));
        }
        *self.saved.borrow_mut() = Some(items.to_vec());
        Ok(())
    }
}

/// The scenario A record set: four valid records plus one missing its id
pub fn scenario_a_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(1, "Gadget Alpha", 150.75),
        RawRecord::new(2, "Widget Beta", 85.0),
        RawRecord::new(3, "Thingamajig Gamma", 210.5),
        RawRecord::new(4, "Doohickey Delta", 55.2),
        RawRecord {
            item_id: None,
            name: Some("Invalid Item".to_string()),
            value: Some(10.0),
        },
    ]
}
