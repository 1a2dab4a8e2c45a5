//! Tests for remap and remap_collection

use dotpath::{Accessor, Doc, MissingPolicy, PathError, PathMap, Value, remap, remap_collection};
use serde_json::json;

use crate::helpers::*;

fn name_map() -> PathMap {
    [("first", "name.first"), ("last", "name.last")]
        .into_iter()
        .collect()
}

#[test]
fn test_remap_builds_nested_destination() {
    let person = doc(json!({"first": "Jane", "last": "Doe", "age": 41}));

    let shaped = remap(&person, &name_map(), MissingPolicy::WriteNull).unwrap();
    assert_eq!(shaped, doc(json!({"name": {"first": "Jane", "last": "Doe"}})));
}

#[test]
fn test_remap_does_not_modify_source() {
    let person = doc(json!({"first": "Jane", "last": "Doe"}));
    let before = person.clone();

    let _ = remap(&person, &name_map(), MissingPolicy::default()).unwrap();
    assert_eq!(person, before);
}

#[test]
fn test_remap_missing_source_writes_null() {
    let map: PathMap = [("src", "dest")].into_iter().collect();

    let out = remap(&Doc::new(), &map, MissingPolicy::WriteNull).unwrap();
    assert_eq!(out, doc(json!({"dest": null})));
    assert_eq!(out.get("dest"), Some(&Value::Null));
}

#[test]
fn test_remap_missing_source_skipped() {
    let map: PathMap = [("src", "dest"), ("present", "kept")].into_iter().collect();
    let input = doc(json!({"present": 1}));

    let out = remap(&input, &map, MissingPolicy::Skip).unwrap();
    assert_eq!(out, doc(json!({"kept": 1})));
}

#[test]
fn test_remap_copies_subtrees_and_flattens() {
    let user = sample_user();
    let map: PathMap = [
        ("user.profile", "profile"),
        ("user.profile.name", "display_name"),
        ("user.age", "stats.age"),
    ]
    .into_iter()
    .collect();

    let out = remap(&user, &map, MissingPolicy::WriteNull).unwrap();
    assert_eq!(key_list(&out), ["profile", "display_name", "stats"]);
    assert_text(out.get_path("profile.email"), "alice@example.com");
    assert_text(out.get("display_name"), "Alice");
    assert_eq!(out.get_path("stats.age"), Some(&Value::Int(30)));
}

#[test]
fn test_remap_uses_literal_source_keys() {
    let input = doc(json!({"a.b": "literal", "a": {"b": "nested"}}));
    let map: PathMap = [("a.b", "out")].into_iter().collect();

    let out = remap(&input, &map, MissingPolicy::WriteNull).unwrap();
    assert_text(out.get("out"), "literal");
}

#[test]
fn test_remap_conflicting_destinations_fail() {
    let input = doc(json!({"x": 1, "y": 2}));
    let map: PathMap = [("x", "out"), ("y", "out.inner")].into_iter().collect();

    let err = remap(&input, &map, MissingPolicy::WriteNull).unwrap_err();
    assert!(matches!(err, PathError::TypeMismatch { found: "int", .. }));
    assert_eq!(err.path(), Some("out.inner"));
}

#[test]
fn test_remap_later_pairs_overwrite_earlier() {
    let input = doc(json!({"x": 1, "y": 2}));
    let map: PathMap = [("x", "out"), ("y", "out")].into_iter().collect();

    let out = remap(&input, &map, MissingPolicy::WriteNull).unwrap();
    assert_eq!(out, doc(json!({"out": 2})));
}

#[test]
fn test_remap_with_custom_delimiter() {
    let slash = Accessor::with_delimiter("/").unwrap();
    let input = doc(json!({"meta": {"id": 7}}));
    let map: PathMap = [("meta/id", "record/id")].into_iter().collect();

    let out = slash.remap(&input, &map, MissingPolicy::WriteNull).unwrap();
    assert_eq!(out, doc(json!({"record": {"id": 7}})));
}

#[test]
fn test_remap_collection_preserves_order() {
    let docs = vec![doc(json!({"a": 1})), doc(json!({"a": 2})), doc(json!({}))];
    let map: PathMap = [("a", "x")].into_iter().collect();

    let out = remap_collection(&docs, &map, MissingPolicy::WriteNull).unwrap();
    assert_eq!(
        out,
        vec![
            doc(json!({"x": 1})),
            doc(json!({"x": 2})),
            doc(json!({"x": null})),
        ]
    );

    let skipped = remap_collection(&docs, &map, MissingPolicy::Skip).unwrap();
    assert_eq!(skipped[2], Doc::new());
}

#[test]
fn test_remap_collection_empty() {
    let out = remap_collection(&[], &name_map(), MissingPolicy::WriteNull).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_path_map_from_json_keeps_order() {
    let map: PathMap = serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();

    let sources: Vec<&str> = map.iter().map(|(source, _)| source).collect();
    assert_eq!(sources, ["z", "a", "m"]);
    assert_eq!(map.get("a"), Some("2"));
}
