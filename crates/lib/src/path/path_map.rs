//! Remapping documents into a new shape.
//!
//! A [`PathMap`] pairs source paths with destination paths. Remapping reads
//! each source path from the input document and writes the value to the
//! destination path of a fresh document, in the order the pairs were added.
//!
//! ```
//! use dotpath::{Doc, MissingPolicy, PathMap, remap};
//!
//! let person = Doc::new().with("first", "Jane").with("last", "Doe");
//! let map: PathMap = [("first", "name.first"), ("last", "name.last")]
//!     .into_iter()
//!     .collect();
//!
//! let shaped = remap(&person, &map, MissingPolicy::default())?;
//! assert_eq!(shaped.get_path("name.first").and_then(|v| v.as_text()), Some("Jane"));
//! # Ok::<(), dotpath::PathError>(())
//! ```

use indexmap::IndexMap;

use super::{Accessor, PathError};
use crate::{Doc, Value};

/// What [`Accessor::remap`] does with a source path that does not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Write `Null` at the destination path
    #[default]
    WriteNull,
    /// Leave the destination path out of the result
    Skip,
}

/// An insertion-ordered mapping from source paths to destination paths.
///
/// Deserializes from a JSON object of strings, keeping the object's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathMap {
    entries: IndexMap<String, String>,
}

impl PathMap {
    /// Creates an empty path map
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `source` to `dest`, returning the previous destination for `source`
    pub fn insert(&mut self, source: impl Into<String>, dest: impl Into<String>) -> Option<String> {
        self.entries.insert(source.into(), dest.into())
    }

    /// Returns the destination mapped to `source`
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Returns the number of mappings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no mappings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(source, dest)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }
}

impl<S: Into<String>, D: Into<String>> FromIterator<(S, D)> for PathMap {
    fn from_iter<T: IntoIterator<Item = (S, D)>>(iter: T) -> Self {
        let mut map = PathMap::new();
        for (source, dest) in iter {
            map.insert(source, dest);
        }
        map
    }
}

impl Accessor {
    /// Builds a new document by copying values from source to destination paths.
    ///
    /// For every `(source, dest)` pair in order: when `source` resolves in
    /// `values`, its value is cloned to `dest`; when it does not, `dest` is
    /// set to `Null` under [`MissingPolicy::WriteNull`] and skipped under
    /// [`MissingPolicy::Skip`]. `values` is never modified.
    ///
    /// # Errors
    /// Propagates [`PathError::TypeMismatch`] from writing a destination whose
    /// parent was already written as a non-document value.
    pub fn remap(
        &self,
        values: &Doc,
        path_map: &PathMap,
        missing: MissingPolicy,
    ) -> Result<Doc, PathError> {
        let mut results = Doc::new();
        for (source, dest) in path_map.iter() {
            match self.get(values, source) {
                Some(value) => {
                    self.set(&mut results, dest, value.clone())?;
                }
                None if missing == MissingPolicy::WriteNull => {
                    self.set(&mut results, dest, Value::Null)?;
                }
                None => {
                    tracing::trace!(source, dest, "Skipping missing source path");
                }
            }
        }
        Ok(results)
    }

    /// Applies [`Accessor::remap`] to each document, preserving order.
    ///
    /// Stops at the first document that fails to remap.
    pub fn remap_collection(
        &self,
        collection: &[Doc],
        path_map: &PathMap,
        missing: MissingPolicy,
    ) -> Result<Vec<Doc>, PathError> {
        tracing::debug!(
            documents = collection.len(),
            paths = path_map.len(),
            "Remapping collection"
        );
        collection
            .iter()
            .map(|doc| self.remap(doc, path_map, missing))
            .collect()
    }
}
