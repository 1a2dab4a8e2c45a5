//! Tests for delete and delete_paths

use dotpath::{Accessor, Doc, Value, delete, delete_paths, exists, get};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_delete_nested_value() {
    let mut user = sample_user();

    let removed = delete(&mut user, "user.profile.email");
    assert_eq!(removed, Some(Value::Text("alice@example.com".to_string())));
    assert!(!exists(&user, "user.profile.email"));
    // Parents stay in place
    assert!(exists(&user, "user.profile"));
    assert_text(get(&user, "user.profile.name"), "Alice");
}

#[test]
fn test_delete_literal_key_first() {
    let mut data = doc(json!({"a.b": 1, "a": {"b": 2}}));

    assert_eq!(delete(&mut data, "a.b"), Some(Value::Int(1)));
    assert_eq!(data, doc(json!({"a": {"b": 2}})));

    // With the literal key gone the nested value is next
    assert_eq!(delete(&mut data, "a.b"), Some(Value::Int(2)));
    assert_eq!(data, doc(json!({"a": {}})));
}

#[test]
fn test_delete_missing_path_is_noop() {
    let mut user = sample_user();
    let before = user.clone();

    assert_eq!(delete(&mut user, "user.profile.phone"), None);
    assert_eq!(delete(&mut user, "nobody.here"), None);
    assert_eq!(delete(&mut user, "user.age.years"), None);
    assert_eq!(delete(&mut user, ""), None);
    assert_eq!(user, before);
}

#[test]
fn test_delete_preserves_sibling_order() {
    let mut data = doc(json!({"a": {"x": 1, "y": 2, "z": 3}}));
    delete(&mut data, "a.y");

    let inner = get(&data, "a").and_then(Value::as_doc).unwrap();
    assert_eq!(key_list(inner), ["x", "z"]);
}

#[test]
fn test_delete_paths_in_order() {
    let mut user = sample_user();

    let removed = delete_paths(
        &mut user,
        ["user.profile.name", "missing.path", "active", "user.profile.name"],
    );
    assert_eq!(removed, 2);
    assert_eq!(
        user,
        doc(json!({"user": {"profile": {"email": "alice@example.com"}, "age": 30}}))
    );
}

#[test]
fn test_delete_paths_accepts_owned_strings() {
    let mut data = doc(json!({"a": 1, "b": 2, "c": 3}));
    let paths: Vec<String> = vec!["a".into(), "c".into()];

    assert_eq!(delete_paths(&mut data, &paths), 2);
    assert_eq!(key_list(&data), ["b"]);
}

#[test]
fn test_delete_with_custom_delimiter() {
    let colon = Accessor::with_delimiter(":").unwrap();
    let mut data = doc(json!({"a": {"b": 1, "c": 2}}));

    assert_eq!(colon.delete(&mut data, "a:b"), Some(Value::Int(1)));
    assert_eq!(colon.delete(&mut data, "a.c"), None);
    assert_eq!(data, doc(json!({"a": {"c": 2}})));
    assert_eq!(Doc::new(), doc(json!({})));
}
