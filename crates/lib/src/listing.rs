//! Shallow listings of a document's top level.
//!
//! None of these helpers recurse: nested documents and lists are rendered
//! through their `Display` form.

use std::fmt::Display;

use crate::{Doc, Value};

/// Glue placed between key and value by [`flatten`] unless told otherwise.
pub const DEFAULT_GLUE: &str = "=";

/// Prepends `prefix` to the display form of every element.
///
/// ```
/// assert_eq!(dotpath::prefix([1, 2], "n"), ["n1", "n2"]);
/// ```
pub fn prefix<I>(values: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| format!("{prefix}{value}"))
        .collect()
}

/// Prepends `prefix` to every string in place, returning the same slice.
pub fn prefix_in_place<'a>(values: &'a mut [String], prefix: &str) -> &'a mut [String] {
    for value in values.iter_mut() {
        value.insert_str(0, prefix);
    }
    values
}

/// Renders each top-level entry as `key`, `glue`, value.
///
/// ```
/// # use dotpath::Doc;
/// let doc = Doc::new().with("a", 1).with("b", 2);
/// assert_eq!(dotpath::flatten(&doc, "="), ["a=1", "b=2"]);
/// ```
pub fn flatten(doc: &Doc, glue: &str) -> Vec<String> {
    doc.iter()
        .map(|(key, value)| format!("{key}{glue}{value}"))
        .collect()
}

/// Returns the top-level keys, each prefixed when `prefix` is non-empty.
pub fn keys(doc: &Doc, prefix: Option<&str>) -> Vec<String> {
    match prefix {
        Some(p) if !p.is_empty() => self::prefix(doc.keys(), p),
        _ => doc.keys().cloned().collect(),
    }
}

/// Returns the top-level values.
///
/// When `prefix` is non-empty every value is replaced by the text of
/// `prefix` followed by the value's display form.
pub fn values(doc: &Doc, prefix: Option<&str>) -> Vec<Value> {
    match prefix {
        Some(p) if !p.is_empty() => self::prefix(doc.values(), p)
            .into_iter()
            .map(Value::Text)
            .collect(),
        _ => doc.values().cloned().collect(),
    }
}
