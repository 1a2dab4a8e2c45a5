//! Recursive leaf transforms.

use crate::{Doc, Value};

/// A single step of a [`map`] pipeline.
pub type Callback<'a> = &'a dyn Fn(Value) -> Value;

/// Returns a copy of `doc` with its leaves passed through `callbacks`.
///
/// Nested documents are always recursed into, whatever their key. A leaf is
/// transformed when `keys` is `None` or contains the leaf's own key; the
/// filter applies at every level. Each selected leaf is threaded through the
/// callbacks in order, the output of one feeding the next. `doc` itself is
/// not modified.
///
/// ```
/// use dotpath::{Doc, Value, map};
///
/// fn upper(value: Value) -> Value {
///     match value {
///         Value::Text(s) => Value::Text(s.to_uppercase()),
///         other => other,
///     }
/// }
///
/// let doc = Doc::new()
///     .with("a", "x")
///     .with("b", Doc::new().with("c", "y"));
/// let out = map(&[&upper], &doc, None);
///
/// assert_eq!(out.get_path("a").and_then(|v| v.as_text()), Some("X"));
/// assert_eq!(out.get_path("b.c").and_then(|v| v.as_text()), Some("Y"));
/// ```
pub fn map(callbacks: &[Callback<'_>], doc: &Doc, keys: Option<&[&str]>) -> Doc {
    doc.iter()
        .map(|(key, value)| {
            let mapped = match value {
                Value::Doc(child) => Value::Doc(map(callbacks, child, keys)),
                leaf if selected(key, keys) => callbacks
                    .iter()
                    .fold(leaf.clone(), |acc, callback| callback(acc)),
                leaf => leaf.clone(),
            };
            (key.clone(), mapped)
        })
        .collect()
}

fn selected(key: &str, keys: Option<&[&str]>) -> bool {
    keys.is_none_or(|keys| keys.contains(&key))
}
