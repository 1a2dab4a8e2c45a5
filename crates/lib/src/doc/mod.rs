//! Nested document type.
//!
//! [`Doc`] is the nested mapping every path operation works on: an
//! insertion-ordered map from string keys to [`Value`]s, where a value may
//! itself be a `Doc`. Its own methods address *literal* keys only; path
//! traversal lives in [`crate::path`], with the `*_path` convenience methods
//! delegating to the default [`Accessor`](crate::Accessor).
//!
//! # Usage
//!
//! ```
//! use dotpath::Doc;
//!
//! let mut doc = Doc::new();
//! doc.insert("name", "Alice");
//! doc.set_path("user.profile.bio", "Software developer")?;
//!
//! assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
//! assert!(doc.contains_path("user.profile.bio"));
//! assert!(!doc.contains_key("user.profile.bio"));
//! # Ok::<(), dotpath::PathError>(())
//! ```

use std::fmt;

use indexmap::{IndexMap, map::Entry};

use crate::path::{Accessor, PathError};

pub mod value;

pub use value::Value;

/// An insertion-ordered nested mapping.
///
/// Iteration (`iter`, `keys`, `values`, `Display`, serialization) follows
/// insertion order. Removing a key keeps the relative order of the rest.
///
/// # Examples
///
/// ```
/// # use dotpath::Doc;
/// let doc = Doc::new()
///     .with("b", 2)
///     .with("a", 1);
///
/// let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["b", "a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    /// Child values indexed by string keys
    children: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Returns true if this document has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if `key` is a direct (literal) key of this document
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets the value stored under a literal key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to the value stored under a literal key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Gets a literal key's value with automatic type conversion using TryFrom
    ///
    /// Returns None if the key doesn't exist or the conversion fails.
    ///
    /// ```
    /// # use dotpath::Doc;
    /// let doc = Doc::new().with("age", 30);
    /// assert_eq!(doc.get_as::<i64>("age"), Some(30));
    /// assert_eq!(doc.get_as::<String>("age"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = PathError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Stores a value under a literal key, returning the old value if present.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a literal key, returning its value if present.
    ///
    /// The remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.shift_remove(key)
    }

    /// Gets the entry for a literal key for in-place manipulation
    pub fn entry(&mut self, key: impl Into<String>) -> Entry<'_, String, Value> {
        self.children.entry(key.into())
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all key-value pairs in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Clears all data from this document
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Gets a value by path using the default `.` delimiter.
    ///
    /// See [`Accessor::get`].
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        Accessor::default().get(self, path)
    }

    /// Sets a value by path using the default `.` delimiter.
    ///
    /// See [`Accessor::set`].
    pub fn set_path(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, PathError> {
        Accessor::default().set(self, path, value)
    }

    /// Removes a value by path using the default `.` delimiter.
    ///
    /// See [`Accessor::delete`].
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        Accessor::default().delete(self, path)
    }

    /// Returns true if the path resolves using the default `.` delimiter.
    ///
    /// See [`Accessor::exists`].
    pub fn contains_path(&self, path: &str) -> bool {
        Accessor::default().exists(self, path)
    }

    /// Parses a document from a JSON object.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to a compact JSON string, keeping key order.
    ///
    /// ```
    /// # use dotpath::Doc;
    /// let doc = Doc::from_json(r#"{"b": 1, "a": [true, null]}"#)?;
    /// assert_eq!(doc.to_json_string()?, r#"{"b":1,"a":[true,null]}"#);
    /// # Ok::<(), dotpath::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] if serialization fails.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder method to insert a literal key and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut doc = Doc::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Doc {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
