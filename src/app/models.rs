//! Data models for the item pipeline
//!
//! This module contains the core data structures: the raw record shape as it
//! arrives from a data source, and the validated `Item` the pipeline operates
//! on. A raw record only becomes an `Item` when all required fields are
//! present and the name is non-empty.

use crate::constants::{fields, status};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Raw Record Structure
// =============================================================================

/// One raw record as supplied by a data source
///
/// Every field is optional: sources may deliver incomplete records and the
/// pipeline is expected to skip them without aborting the batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Integer identifier, required for item construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,

    /// Text label, required for item construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Numeric measure, required for item construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl RawRecord {
    /// Create a complete raw record
    pub fn new(item_id: i32, name: impl Into<String>, value: f64) -> Self {
        Self {
            item_id: Some(item_id),
            name: Some(name.into()),
            value: Some(value),
        }
    }

    /// Names of the required fields that are absent from this record
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.item_id.is_none() {
            missing.push(fields::ITEM_ID);
        }
        if self.name.is_none() {
            missing.push(fields::NAME);
        }
        if self.value.is_none() {
            missing.push(fields::VALUE);
        }
        missing
    }

    /// Whether all required fields are present
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Convert this record into an `Item`
    ///
    /// Fails when a required field is missing or when item validation
    /// rejects the field values.
    pub fn into_item(self) -> Result<Item> {
        let missing = self.missing_fields();
        match (self.item_id, self.name, self.value) {
            (Some(item_id), Some(name), Some(value)) => Item::new(item_id, name, value),
            _ => Err(Error::invalid_record(&missing)),
        }
    }
}

// =============================================================================
// Item Structure
// =============================================================================

/// One unit-of-work record with identity, name, numeric value, and a
/// processed flag
///
/// An `Item` always has a non-empty name once constructed. The `processed`
/// flag starts false and is flipped to true exactly once by the item
/// processor; it never reverts within a run. Each item is exclusively owned
/// by the pipeline driver for the duration of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique integer identifier
    pub item_id: i32,

    /// Human-readable item name, never empty
    pub name: String,

    /// Numeric measure compared against the processing threshold
    pub value: f64,

    /// Whether the item has been processed in this run
    pub processed: bool,
}

impl Item {
    /// Create a new item with validation
    ///
    /// The `processed` flag defaults to false. Fails when the name is empty
    /// or whitespace-only. The value is deliberately not range-checked at
    /// this layer.
    pub fn new(item_id: i32, name: impl Into<String>, value: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::item_construction(format!(
                "Item {} must have a non-empty name",
                item_id
            )));
        }

        Ok(Self {
            item_id,
            name,
            value,
            processed: false,
        })
    }

    /// Set the processed flag to true
    ///
    /// Idempotent: calling it on an already-processed item leaves the flag
    /// set and never errors.
    pub fn mark_processed(&mut self) {
        self.processed = true;
    }

    /// Status label for the current processed state
    pub fn status_label(&self) -> &'static str {
        if self.processed {
            status::PROCESSED
        } else {
            status::PENDING
        }
    }
}

impl fmt::Display for Item {
    /// Deterministic textual rendering, stable for logging and testing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(ID={}, Name='{}', Value={:.2}, Status={})",
            self.item_id,
            self.name,
            self.value,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_construction() {
        let item = Item::new(1, "Gadget Alpha", 150.75).unwrap();
        assert_eq!(item.item_id, 1);
        assert_eq!(item.name, "Gadget Alpha");
        assert_eq!(item.value, 150.75);
        assert!(!item.processed);
    }

    #[test]
    fn test_item_empty_name_rejected() {
        let result = Item::new(7, "", 10.0);
        assert!(matches!(result, Err(Error::ItemConstruction { .. })));
    }

    #[test]
    fn test_item_whitespace_name_rejected() {
        let result = Item::new(7, "   ", 10.0);
        assert!(matches!(result, Err(Error::ItemConstruction { .. })));
    }

    #[test]
    fn test_mark_processed_is_idempotent() {
        let mut item = Item::new(2, "Widget Beta", 85.0).unwrap();
        item.mark_processed();
        assert!(item.processed);
        item.mark_processed();
        assert!(item.processed);
    }

    #[test]
    fn test_display_pending() {
        let item = Item::new(1, "Gadget Alpha", 150.75).unwrap();
        assert_eq!(
            item.to_string(),
            "Item(ID=1, Name='Gadget Alpha', Value=150.75, Status=Pending)"
        );
    }

    #[test]
    fn test_display_processed() {
        let mut item = Item::new(2, "Widget Beta", 85.0).unwrap();
        item.mark_processed();
        assert_eq!(
            item.to_string(),
            "Item(ID=2, Name='Widget Beta', Value=85.00, Status=Processed)"
        );
    }

    #[test]
    fn test_display_two_decimal_places() {
        let item = Item::new(3, "Thingamajig Gamma", 210.5).unwrap();
        assert!(item.to_string().contains("Value=210.50"));

        let negative = Item::new(4, "Doohickey Delta", -55.239).unwrap();
        assert!(negative.to_string().contains("Value=-55.24"));

        let whole = Item::new(5, "Widget", 7.0).unwrap();
        assert!(whole.to_string().contains("Value=7.00"));
    }

    #[test]
    fn test_raw_record_missing_fields() {
        let complete = RawRecord::new(1, "Gadget Alpha", 150.75);
        assert!(complete.is_complete());
        assert!(complete.missing_fields().is_empty());

        let no_id = RawRecord {
            item_id: None,
            name: Some("Invalid Item".to_string()),
            value: Some(10.0),
        };
        assert!(!no_id.is_complete());
        assert_eq!(no_id.missing_fields(), vec!["item_id"]);

        let empty = RawRecord::default();
        assert_eq!(empty.missing_fields(), vec!["item_id", "name", "value"]);
    }

    #[test]
    fn test_into_item_complete_record() {
        let record = RawRecord::new(2, "Widget Beta", 85.0);
        let item = record.into_item().unwrap();
        assert_eq!(item.item_id, 2);
        assert_eq!(item.name, "Widget Beta");
        assert!(!item.processed);
    }

    #[test]
    fn test_into_item_rejects_missing_id() {
        let record = RawRecord {
            item_id: None,
            name: Some("Invalid Item".to_string()),
            value: Some(10.0),
        };
        let result = record.into_item();
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
    }

    #[test]
    fn test_into_item_rejects_missing_name() {
        let record = RawRecord {
            item_id: Some(5),
            name: None,
            value: Some(20.0),
        };
        assert!(record.into_item().is_err());
    }

    #[test]
    fn test_into_item_rejects_missing_value() {
        let record = RawRecord {
            item_id: Some(6),
            name: Some("No Value".to_string()),
            value: None,
        };
        assert!(record.into_item().is_err());
    }

    #[test]
    fn test_into_item_rejects_blank_name() {
        // All fields present but the name fails item validation
        let record = RawRecord::new(8, "  ", 5.0);
        let result = record.into_item();
        assert!(matches!(result, Err(Error::ItemConstruction { .. })));
    }

    #[test]
    fn test_raw_record_deserializes_with_missing_keys() {
        let record: RawRecord =
            serde_json::from_str(r#"{"name": "Invalid Item", "value": 10.0}"#).unwrap();
        assert_eq!(record.item_id, None);
        assert_eq!(record.name.as_deref(), Some("Invalid Item"));
        assert_eq!(record.value, Some(10.0));
    }

    #[test]
    fn test_item_serde_round_trip() {
        let item = Item::new(3, "Thingamajig Gamma", 210.5).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
