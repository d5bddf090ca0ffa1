//! Tests for the data source module


use crate::app::models::{Item, RawRecord};

/// Create the scenario record set used across source tests: four complete
/// records plus one missing its id
pub fn scenario_records() -> Vec<RawRecord> {
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

/// Create a small list of constructed test items
pub fn test_items() -> Vec<Item> {
    vec![
        Item::new(1, "Gadget Alpha", 150.75).unwrap(),
        Item::new(2, "Widget Beta", 85.0).unwrap(),
    ]
}
