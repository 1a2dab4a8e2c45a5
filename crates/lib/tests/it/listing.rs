//! Tests for keys, values, flatten and prefix

use dotpath::listing::DEFAULT_GLUE;
use dotpath::{Doc, Value, flatten, keys, prefix, prefix_in_place, values};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_flatten_top_level_entries() {
    let data = doc(json!({"a": 1, "b": 2}));

    assert_eq!(flatten(&data, DEFAULT_GLUE), ["a=1", "b=2"]);
    assert_eq!(flatten(&data, ": "), ["a: 1", "b: 2"]);
    assert_eq!(flatten(&data, ""), ["a1", "b2"]);
}

#[test]
fn test_flatten_renders_nested_values() {
    let data = doc(json!({"name": "Jane", "flag": null, "tags": ["x", "y"], "inner": {"k": true}}));

    assert_eq!(
        flatten(&data, "="),
        ["name=Jane", "flag=null", "tags=[x, y]", "inner={k: true}"]
    );
}

#[test]
fn test_flatten_empty_doc() {
    assert!(flatten(&Doc::new(), "=").is_empty());
}

#[test]
fn test_keys_in_insertion_order() {
    let data = doc(json!({"b": 1, "a": 2, "c": {"nested": 3}}));

    assert_eq!(keys(&data, None), ["b", "a", "c"]);
    assert_eq!(keys(&data, Some("")), ["b", "a", "c"]);
}

#[test]
fn test_keys_with_prefix() {
    let data = doc(json!({"a": 1, "b": 2}));

    assert_eq!(keys(&data, Some("x_")), ["x_a", "x_b"]);
}

#[test]
fn test_values_without_prefix_are_cloned() {
    let user = sample_user();
    let listed = values(&user, None);

    assert_eq!(listed.len(), 2);
    assert!(listed[0].is_doc());
    assert_eq!(listed[1], Value::Bool(true));
}

#[test]
fn test_values_with_prefix_become_text() {
    let data = doc(json!({"a": 1, "b": "two", "c": [3]}));

    assert_eq!(
        values(&data, Some("v:")),
        [
            Value::Text("v:1".to_string()),
            Value::Text("v:two".to_string()),
            Value::Text("v:[3]".to_string()),
        ]
    );
}

#[test]
fn test_prefix_display_items() {
    assert_eq!(prefix(["a", "b"], "-"), ["-a", "-b"]);
    assert_eq!(prefix([1.5, 2.0], "#"), ["#1.5", "#2"]);
    assert!(prefix(Vec::<String>::new(), "x").is_empty());
}

#[test]
fn test_prefix_in_place_returns_same_slice() {
    let mut items = vec!["one".to_string(), "two".to_string()];
    prefix_in_place(&mut items, ">");
    prefix_in_place(&mut items, ">");

    assert_eq!(items, [">>one", ">>two"]);
}
