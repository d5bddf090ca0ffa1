//! Tests for the item processor module

pub mod processor_tests;

use crate::app::models::Item;

/// Create a test item with the given value
pub fn create_test_item(item_id: i32, value: f64) -> Item {
    Item::new(item_id, format!("Test Item {}", item_id), value).unwrap()
}
