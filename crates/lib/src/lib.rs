//!
//! dotpath: read, write and reshape nested documents through delimited path strings.
//!
//! ## Core Concepts
//!
//! * **Documents (`Doc`)**: An insertion-ordered mapping from string keys to values. Values
//!   may themselves be documents, to any depth.
//! * **Values (`Value`)**: Scalars (`Null`, `Bool`, `Int`, `Float`, `Text`), opaque lists and
//!   nested documents.
//! * **Paths**: Strings like `user.profile.name`. A path matching a top-level key literally
//!   always wins; otherwise it is split on the delimiter and walked segment by segment.
//! * **Accessor (`path::Accessor`)**: Carries the delimiter and implements `get`, `set`,
//!   `delete`, `exists` and `remap`. The free functions at the crate root use the default
//!   `.` delimiter.
//! * **Listings (`listing`)**: Shallow helpers over the top level: `keys`, `values`,
//!   `flatten`, `prefix`.
//! * **Transforms (`transform::map`)**: Rebuild a document with every leaf passed through a
//!   sequence of callbacks.
//!
//! ```
//! use dotpath::{Doc, MissingPolicy, PathMap};
//!
//! let mut doc = Doc::new();
//! dotpath::set(&mut doc, "user.name", "Alice")?;
//! assert!(dotpath::exists(&doc, "user.name"));
//!
//! let map: PathMap = [("user.name", "author")].into_iter().collect();
//! let shaped = dotpath::remap(&doc, &map, MissingPolicy::Skip)?;
//! assert_eq!(dotpath::flatten(&shaped, "="), ["author=Alice"]);
//! # Ok::<(), dotpath::Error>(())
//! ```

pub mod doc;
pub mod listing;
pub mod path;
pub mod transform;

pub use doc::{Doc, Value};
pub use listing::{flatten, keys, prefix, prefix_in_place, values};
pub use path::{
    Accessor, MissingPolicy, PathError, PathMap, delete, delete_paths, exists, get, get_or,
    remap, remap_collection, set,
};
pub use transform::{Callback, map};

/// Result type used throughout the dotpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error comes from a type mismatch during traversal or conversion.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Path(err) if err.is_type_error())
    }
}
