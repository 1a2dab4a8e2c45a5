//! JSON representation of documents

use dotpath::{Doc, Error, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_json_round_trip_keeps_key_order() {
    let raw = r#"{"zeta":1,"alpha":{"y":true,"x":null},"mid":[1,"two",3.5]}"#;
    let parsed = Doc::from_json(raw).unwrap();

    assert_eq!(key_list(&parsed), ["zeta", "alpha", "mid"]);
    assert_eq!(parsed.to_json_string().unwrap(), raw);
}

#[test]
fn test_json_numbers_keep_their_kind() {
    let parsed = doc(json!({"int": 42, "neg": -3, "float": 1.25}));

    assert_eq!(parsed.get("int"), Some(&Value::Int(42)));
    assert_eq!(parsed.get("neg"), Some(&Value::Int(-3)));
    assert_eq!(parsed.get("float"), Some(&Value::Float(1.25)));
}

#[test]
fn test_nested_objects_become_documents() {
    let user = sample_user();

    let inner = user.get("user").unwrap();
    assert!(inner.is_doc());
    assert!(!inner.is_leaf());
    assert!(user.get("active").unwrap().is_leaf());
}

#[test]
fn test_from_json_rejects_non_objects() {
    for raw in ["[1, 2]", "42", "\"text\"", "{not json"] {
        let err = Doc::from_json(raw).unwrap_err();
        assert!(matches!(err, Error::Serialize(_)), "accepted {raw}");
        assert_eq!(err.module(), "serialize");
    }
}

#[test]
fn test_serde_json_value_interop() {
    let original = json!({"a": {"b": [1, {"c": "d"}]}, "e": null});
    let parsed: Doc = serde_json::from_value(original.clone()).unwrap();

    assert_eq!(serde_json::to_value(&parsed).unwrap(), original);
}

#[test]
fn test_edits_serialize_in_place() {
    let mut data = doc(json!({"a": 1, "b": 2, "c": 3}));
    data.insert("a", 10);
    data.remove("b");
    data.set_path("d.e", "f").unwrap();

    assert_eq!(data.to_json_string().unwrap(), r#"{"a":10,"c":3,"d":{"e":"f"}}"#);
}

#[test]
fn test_integers_beyond_i64_are_rejected() {
    let err = Doc::from_json(r#"{"id": 18446744073709551615}"#).unwrap_err();
    assert!(matches!(err, Error::Serialize(_)));

    // Nested values are checked the same way
    assert!(Doc::from_json(r#"{"a": {"ids": [1, 9223372036854775808]}}"#).is_err());
}

#[test]
fn test_integer_bounds_round_trip() {
    let raw = r#"{"max":9223372036854775807,"min":-9223372036854775808}"#;
    let parsed = Doc::from_json(raw).unwrap();

    assert_eq!(parsed.get("max"), Some(&Value::Int(i64::MAX)));
    assert_eq!(parsed.get("min"), Some(&Value::Int(i64::MIN)));
    assert_eq!(parsed.to_json_string().unwrap(), raw);
}
