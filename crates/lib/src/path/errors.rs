//! Error types for path operations.

use thiserror::Error;

/// Structured error types for path operations.
///
/// Lookups never fail: a missing key is reported as `None`/`false`. These
/// variants cover the few cases where an operation cannot do what it was
/// asked to.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A write traversal reached a value that is neither a document nor null
    #[error("Cannot descend into {found} at segment '{segment}' of path '{path}'")]
    TypeMismatch {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// A value could not be converted to the requested Rust type
    #[error("Type mismatch: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// An accessor was configured with an empty delimiter
    #[error("Path delimiter cannot be empty")]
    EmptyDelimiter,
}

impl PathError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            PathError::TypeMismatch { .. } | PathError::UnexpectedType { .. }
        )
    }

    /// Get the path if this is a traversal error
    pub fn path(&self) -> Option<&str> {
        match self {
            PathError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the offending segment if this is a traversal error
    pub fn segment(&self) -> Option<&str> {
        match self {
            PathError::TypeMismatch { segment, .. } => Some(segment),
            _ => None,
        }
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
