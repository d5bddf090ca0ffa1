//! Tests for threshold comparison and processed-state mutation

use super::create_test_item;
use crate::Error;
use crate::app::services::item_processor::{ItemProcessor, ThresholdOutcome};

#[test]
fn test_threshold_is_stored() {
    let processor = ItemProcessor::new(100);
    assert_eq!(processor.threshold(), 100);
}

#[test]
fn test_value_above_threshold_exceeds() {
    let processor = ItemProcessor::new(100);
    let mut item = create_test_item(1, 150.75);

    let outcome = processor.process_item(&mut item).unwrap();
    assert_eq!(outcome, ThresholdOutcome::Exceeds);
    assert!(item.processed);
}

#[test]
fn test_value_below_threshold_within() {
    let processor = ItemProcessor::new(100);
    let mut item = create_test_item(2, 85.0);

    let outcome = processor.process_item(&mut item).unwrap();
    assert_eq!(outcome, ThresholdOutcome::Within);
    assert!(item.processed);
}

#[test]
fn test_value_equal_to_threshold_within() {
    // Strict greater-than test: equality stays within
    let processor = ItemProcessor::new(100);
    let mut item = create_test_item(3, 100.0);

    let outcome = processor.process_item(&mut item).unwrap();
    assert_eq!(outcome, ThresholdOutcome::Within);
    assert!(item.processed);
}

#[test]
fn test_marks_processed_regardless_of_outcome() {
    let processor = ItemProcessor::new(100);

    let mut above = create_test_item(1, 210.5);
    let mut below = create_test_item(2, 55.2);
    processor.process_item(&mut above).unwrap();
    processor.process_item(&mut below).unwrap();

    assert!(above.processed);
    assert!(below.processed);
}

#[test]
fn test_reprocessing_keeps_item_processed() {
    let processor = ItemProcessor::new(100);
    let mut item = create_test_item(4, 55.2);

    processor.process_item(&mut item).unwrap();
    processor.process_item(&mut item).unwrap();
    assert!(item.processed);
}

#[test]
fn test_scenario_values_classification() {
    // Threshold 100: IDs 1 and 3 exceed, 2 and 4 stay within
    let processor = ItemProcessor::new(100);
    let expectations = [
        (1, 150.75, ThresholdOutcome::Exceeds),
        (2, 85.0, ThresholdOutcome::Within),
        (3, 210.5, ThresholdOutcome::Exceeds),
        (4, 55.2, ThresholdOutcome::Within),
    ];

    for (item_id, value, expected) in expectations {
        let mut item = create_test_item(item_id, value);
        let outcome = processor.process_item(&mut item).unwrap();
        assert_eq!(outcome, expected, "item {} value {}", item_id, value);
        assert!(item.processed);
    }
}

#[test]
fn test_negative_threshold() {
    let processor = ItemProcessor::new(-10);
    let mut item = create_test_item(5, 0.0);

    let outcome = processor.process_item(&mut item).unwrap();
    assert_eq!(outcome, ThresholdOutcome::Exceeds);
}

#[test]
fn test_non_finite_value_fails_without_mutation() {
    let processor = ItemProcessor::new(100);

    let mut nan_item = create_test_item(6, f64::NAN);
    let result = processor.process_item(&mut nan_item);
    assert!(matches!(result, Err(Error::Processing { .. })));
    assert!(!nan_item.processed);

    let mut inf_item = create_test_item(7, f64::INFINITY);
    assert!(processor.process_item(&mut inf_item).is_err());
    assert!(!inf_item.processed);
}
