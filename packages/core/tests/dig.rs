//! Read traversal tests: `dig`, `dig_mut` and `path_exists`

use nestpath_core::{BadPathReason, dig, dig_mut, path_exists};
use serde_json::json;

const ROOT: &[&str] = &[];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_dig_nested_sequence_element() {
    init_logging();
    let doc = json!({"a": {"b": [1, 2, 3]}});
    let value = dig(&doc, &["a", "b", "0"]).expect("Failed to dig a.b.0");
    assert_eq!(value, &json!(1));
}

#[test]
fn test_dig_empty_path_is_identity() {
    let doc = json!({"a": 1});
    let value = dig(&doc, ROOT).expect("Empty path always resolves");
    assert!(std::ptr::eq(value, &doc));

    let leaf = json!("just a string");
    assert_eq!(dig(&leaf, ROOT).expect("Empty path on a leaf"), &leaf);

    let null = json!(null);
    assert_eq!(dig(&null, ROOT).expect("Empty path on null"), &null);
}

#[test]
fn test_dig_accepts_owned_segments() {
    let doc = json!({"users": [{"name": "ada"}]});
    let path = vec!["users".to_string(), "0".to_string(), "name".to_string()];
    assert_eq!(dig(&doc, &path).expect("Failed to dig"), &json!("ada"));
}

#[test]
fn test_dig_returns_null_values() {
    let doc = json!({"a": null});
    assert_eq!(dig(&doc, &["a"]).expect("null is a value"), &json!(null));
}

#[test]
fn test_dig_missing_key() {
    let doc = json!({"a": {"b": 1}});
    let error = dig(&doc, &["a", "c"]).expect_err("c does not exist");
    assert_eq!(error.reason, BadPathReason::MissingKey);
    assert_eq!(error.position, Some(1));
    assert_eq!(error.segment(), Some("c"));
    assert!(error.is_not_found());
}

#[test]
fn test_dig_index_out_of_range() {
    let doc = json!({"a": {"b": [1, 2, 3]}});
    let error = dig(&doc, &["a", "b", "3"]).expect_err("index 3 is past the end");
    assert_eq!(error.reason, BadPathReason::IndexOutOfRange);
    assert_eq!(error.position, Some(2));
}

#[test]
fn test_dig_rejects_non_integer_sequence_segments() {
    let doc = json!([10, 11, 12]);
    for segment in ["a", "-1", "+1", " 1", "1.0", ""] {
        let error = dig(&doc, &[segment]).expect_err("not a sequence index");
        assert_eq!(error.reason, BadPathReason::InvalidIndex, "segment {segment:?}");
    }
}

#[test]
fn test_dig_accepts_leading_zeros() {
    let doc = json!([10, 11, 12]);
    assert_eq!(dig(&doc, &["02"]).expect("02 is an integer literal"), &json!(12));
}

#[test]
fn test_dig_through_leaf_fails() {
    let doc = json!({"a": 1, "n": null});

    let error = dig(&doc, &["a", "b"]).expect_err("1 is a leaf");
    assert_eq!(error.reason, BadPathReason::LeafTraversal);
    assert_eq!(error.position, Some(1));

    let error = dig(&doc, &["n", "b"]).expect_err("null is a leaf");
    assert_eq!(error.reason, BadPathReason::LeafTraversal);

    let error = dig(&json!(true), &["x"]).expect_err("root leaf");
    assert_eq!(error.reason, BadPathReason::LeafTraversal);
    assert_eq!(error.position, Some(0));
}

#[test]
fn test_dig_numeric_keys_in_maps_are_verbatim() {
    let doc = json!({"0": "zero", "00": "double zero"});
    assert_eq!(dig(&doc, &["0"]).expect("map key"), &json!("zero"));
    assert_eq!(dig(&doc, &["00"]).expect("map key"), &json!("double zero"));
}

#[test]
fn test_dig_mut_allows_in_place_edit() {
    let mut doc = json!({"a": {"b": [1, 2, 3]}});
    *dig_mut(&mut doc, &["a", "b", "1"]).expect("Failed to dig_mut") = json!("two");
    assert_eq!(doc, json!({"a": {"b": [1, "two", 3]}}));

    let error = dig_mut(&mut doc, &["a", "x"]).expect_err("x does not exist");
    assert_eq!(error.reason, BadPathReason::MissingKey);
}

#[test]
fn test_path_exists_empty_path() {
    assert!(path_exists(&json!({}), ROOT).expect("empty path"));
    assert!(path_exists(&json!(42), ROOT).expect("empty path on leaf"));
}

#[test]
fn test_path_exists_found_and_missing() {
    let doc = json!({"a": {"b": [1, 2, 3]}, "n": null});

    assert!(path_exists(&doc, &["a", "b", "2"]).expect("lookup"));
    assert!(path_exists(&doc, &["n"]).expect("null is present"));
    assert!(!path_exists(&doc, &["a", "c"]).expect("lookup"));
    assert!(!path_exists(&doc, &["a", "b", "3"]).expect("lookup"));
    assert!(!path_exists(&doc, &["a", "b", "99999999999999999999999"]).expect("lookup"));
}

#[test]
fn test_path_exists_leaf_with_remaining_segments_is_false() {
    let doc = json!({"a": 1, "n": null});
    assert!(!path_exists(&doc, &["a", "b"]).expect("leaf is not an error"));
    assert!(!path_exists(&doc, &["n", "b"]).expect("leaf is not an error"));
    assert!(!path_exists(&json!("leaf"), &["a"]).expect("leaf is not an error"));
}

#[test]
fn test_path_exists_type_error_is_not_a_miss() {
    let error = path_exists(&json!([10, 11, 12]), &["a"]).expect_err("type mismatch");
    assert_eq!(error.reason, BadPathReason::InvalidIndex);

    let doc = json!({"list": [1]});
    let error = path_exists(&doc, &["list", "-1"]).expect_err("sign is not accepted");
    assert_eq!(error.reason, BadPathReason::InvalidIndex);
}

#[test]
fn test_path_exists_stops_at_first_miss() {
    // The miss on "b" ends the traversal before "x" meets a sequence
    let doc = json!({"a": [1]});
    assert!(!path_exists(&doc, &["b", "x"]).expect("lookup"));
}
