//! Path-addressed access to nested documents.
//!
//! A path is a string of segments joined by a delimiter (`.` by default),
//! e.g. `user.profile.name`. Every operation first checks whether the whole
//! path is a *literal* top-level key, so a key that itself contains the
//! delimiter is always reachable:
//!
//! ```
//! use dotpath::{Doc, get};
//!
//! let doc: Doc = serde_json::from_str(r#"{"a.b": 1, "a": {"b": 2}}"#)?;
//! assert_eq!(get(&doc, "a.b").and_then(|v| v.as_int()), Some(1));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! Otherwise the path is split into segments and walked one document at a
//! time. Segments come from a plain split, so empty segments are kept
//! (`"a..b"` addresses `a` → `""` → `b`).
//!
//! # Core Types
//!
//! - [`Accessor`] - Carries the delimiter and implements every operation
//! - [`PathMap`] / [`MissingPolicy`] - Inputs to [`Accessor::remap`]
//! - [`PathError`] - Failures during write traversal
//!
//! The free functions in this module ([`get`], [`set`], [`delete`], ...) use
//! the default `.` delimiter.

use std::borrow::Cow;

use crate::{Doc, Value};

pub mod errors;
pub mod path_map;

pub use errors::PathError;
pub use path_map::{MissingPolicy, PathMap};

/// The delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ".";

/// Stateless path accessor parameterised by its segment delimiter.
///
/// An `Accessor` holds no reference to any document; every method takes the
/// document it operates on. It is cheap to clone and can be shared freely.
///
/// # Examples
///
/// ```
/// use dotpath::{Accessor, Doc, Value};
///
/// let slash = Accessor::with_delimiter("/")?;
/// let mut doc = Doc::new();
/// slash.set(&mut doc, "config/server/port", 8080)?;
///
/// assert_eq!(slash.get(&doc, "config/server/port"), Some(&Value::Int(8080)));
/// assert!(!slash.exists(&doc, "config.server.port"));
/// # Ok::<(), dotpath::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessor {
    delimiter: Cow<'static, str>,
}

impl Default for Accessor {
    fn default() -> Self {
        Self {
            delimiter: Cow::Borrowed(DEFAULT_DELIMITER),
        }
    }
}

impl Accessor {
    /// Creates an accessor using the default `.` delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accessor splitting paths on `delimiter`.
    ///
    /// # Errors
    /// Returns [`PathError::EmptyDelimiter`] if `delimiter` is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self, PathError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(PathError::EmptyDelimiter);
        }
        Ok(Self {
            delimiter: Cow::Owned(delimiter),
        })
    }

    /// Returns the segment delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Splits a path into its segments.
    ///
    /// Always yields at least one segment; empty segments are preserved.
    pub fn segments<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        path.split(&*self.delimiter)
    }

    /// Gets the value at `path`, or `None` if any segment is missing.
    ///
    /// A literal top-level key equal to `path` takes priority over traversal.
    /// Traversal stops at the first segment that is missing or whose parent
    /// is not a document.
    pub fn get<'a>(&self, doc: &'a Doc, path: &str) -> Option<&'a Value> {
        if doc.is_empty() {
            return None;
        }
        if let Some(value) = doc.get(path) {
            return Some(value);
        }

        let mut segments = self.segments(path);
        let first = segments.next()?;
        let mut current = doc.get(first)?;
        for segment in segments {
            current = current.as_doc()?.get(segment)?;
        }
        Some(current)
    }

    /// Gets the value at `path`, falling back to `default` when it is absent.
    pub fn get_or<'a>(&self, doc: &'a Doc, path: &str, default: &'a Value) -> &'a Value {
        self.get(doc, path).unwrap_or(default)
    }

    /// Gets a mutable reference to the value at `path`.
    ///
    /// Resolves exactly like [`Accessor::get`].
    pub fn get_mut<'a>(&self, doc: &'a mut Doc, path: &str) -> Option<&'a mut Value> {
        if doc.contains_key(path) {
            return doc.get_mut(path);
        }

        let segments: Vec<&str> = self.segments(path).collect();
        let (last, parents) = segments.split_last()?;
        let mut current = doc;
        for segment in parents {
            current = current.get_mut(segment)?.as_doc_mut()?;
        }
        current.get_mut(last)
    }

    /// Returns true if `path` resolves to a value.
    ///
    /// Always agrees with [`Accessor::get`]: `exists(doc, p) == get(doc, p).is_some()`.
    pub fn exists(&self, doc: &Doc, path: &str) -> bool {
        self.get(doc, path).is_some()
    }

    /// Sets the value at `path`, returning the value it replaced.
    ///
    /// A single-segment path is assigned directly as a literal key. Longer
    /// paths are walked from the root: missing intermediate keys are created
    /// as empty documents, and so are intermediate keys holding `Null`.
    ///
    /// # Errors
    /// Returns [`PathError::TypeMismatch`] when an intermediate segment holds
    /// any other non-document value. The document is left unchanged.
    pub fn set(
        &self,
        doc: &mut Doc,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, PathError> {
        let value = value.into();
        let segments: Vec<&str> = self.segments(path).collect();
        let Some((last, parents)) = segments.split_last() else {
            return Ok(doc.insert(path, value));
        };
        if parents.is_empty() {
            return Ok(doc.insert(path, value));
        }

        let mut current = doc;
        for segment in parents {
            let entry = current
                .entry(*segment)
                .or_insert_with(|| Value::Doc(Doc::new()));
            if entry.is_null() {
                tracing::trace!(path, segment, "Replacing null intermediate with a document");
                *entry = Value::Doc(Doc::new());
            }
            current = match entry {
                Value::Doc(child) => child,
                other => {
                    tracing::debug!(
                        path,
                        segment,
                        found = other.type_name(),
                        "Cannot descend into non-document value"
                    );
                    return Err(PathError::TypeMismatch {
                        path: path.to_string(),
                        segment: segment.to_string(),
                        found: other.type_name(),
                    });
                }
            };
        }

        Ok(current.insert(*last, value))
    }

    /// Removes the value at `path`, returning it.
    ///
    /// A literal top-level key is removed directly. Otherwise the parent
    /// chain is walked; if any part of it is missing or not a document this
    /// is a silent no-op.
    pub fn delete(&self, doc: &mut Doc, path: &str) -> Option<Value> {
        if doc.contains_key(path) {
            return doc.remove(path);
        }

        let segments: Vec<&str> = self.segments(path).collect();
        let (last, parents) = segments.split_last()?;
        let mut current = doc;
        for segment in parents {
            current = current.get_mut(segment)?.as_doc_mut()?;
        }
        current.remove(last)
    }

    /// Deletes each path in order, returning how many removed a value.
    pub fn delete_paths<I>(&self, doc: &mut Doc, paths: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|path| self.delete(doc, path.as_ref()).is_some())
            .count()
    }
}

/// Gets the value at a `.`-delimited path. See [`Accessor::get`].
pub fn get<'a>(doc: &'a Doc, path: &str) -> Option<&'a Value> {
    Accessor::default().get(doc, path)
}

/// Gets the value at a `.`-delimited path or `default`. See [`Accessor::get_or`].
pub fn get_or<'a>(doc: &'a Doc, path: &str, default: &'a Value) -> &'a Value {
    Accessor::default().get_or(doc, path, default)
}

/// Sets the value at a `.`-delimited path. See [`Accessor::set`].
pub fn set(doc: &mut Doc, path: &str, value: impl Into<Value>) -> Result<Option<Value>, PathError> {
    Accessor::default().set(doc, path, value)
}

/// Removes the value at a `.`-delimited path. See [`Accessor::delete`].
pub fn delete(doc: &mut Doc, path: &str) -> Option<Value> {
    Accessor::default().delete(doc, path)
}

/// Removes every `.`-delimited path in order. See [`Accessor::delete_paths`].
pub fn delete_paths<I>(doc: &mut Doc, paths: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Accessor::default().delete_paths(doc, paths)
}

/// Returns true if a `.`-delimited path resolves. See [`Accessor::exists`].
pub fn exists(doc: &Doc, path: &str) -> bool {
    Accessor::default().exists(doc, path)
}

/// Builds a new document from `.`-delimited paths. See [`Accessor::remap`].
pub fn remap(values: &Doc, path_map: &PathMap, missing: MissingPolicy) -> Result<Doc, PathError> {
    Accessor::default().remap(values, path_map, missing)
}

/// Remaps every document of a collection. See [`Accessor::remap_collection`].
pub fn remap_collection(
    collection: &[Doc],
    path_map: &PathMap,
    missing: MissingPolicy,
) -> Result<Vec<Doc>, PathError> {
    Accessor::default().remap_collection(collection, path_map, missing)
}
