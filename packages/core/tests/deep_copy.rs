//! Deep copy tests

use std::collections::BTreeMap;

use nestpath_core::{DeepCopyError, bury, deep_copy, deep_copy_from, delete};
use serde_json::json;

#[test]
fn test_deep_copy_is_equal_and_independent() {
    let original = json!({"a": {"b": [1, 2, {"c": "d"}]}, "e": null});
    let mut copy = deep_copy(&original);
    assert_eq!(copy, original);

    bury(&mut copy, &["a", "b", "2", "c"], json!("changed")).expect("Failed to bury");
    delete(&mut copy, &["a", "b", "0"]).expect("Failed to delete");
    bury(&mut copy, &["e"], json!({"new": true})).expect("Failed to bury");

    assert_eq!(original, json!({"a": {"b": [1, 2, {"c": "d"}]}, "e": null}));
    assert_ne!(copy, original);
}

#[test]
fn test_deep_copy_of_leaf() {
    assert_eq!(deep_copy(&json!("text")), json!("text"));
    assert_eq!(deep_copy(&json!(null)), json!(null));
}

#[test]
fn test_deep_copy_from_serializable() {
    #[derive(serde::Serialize)]
    struct Settings {
        name: &'static str,
        retries: Vec<u32>,
    }

    let settings = Settings {
        name: "primary",
        retries: vec![1, 2, 4],
    };
    let copy = deep_copy_from(&settings).expect("plain struct serializes");
    assert_eq!(copy, json!({"name": "primary", "retries": [1, 2, 4]}));
}

#[test]
fn test_deep_copy_from_rejects_unrepresentable_keys() {
    let mut grid = BTreeMap::new();
    grid.insert((0_u8, 1_u8), "cell");

    let error = deep_copy_from(&grid).expect_err("tuple keys are not strings");
    assert!(matches!(error, DeepCopyError::Serialization(_)));
}
