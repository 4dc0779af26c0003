//! Path resolution error types
//!
//! Only shape violations are errors. A missing key is reported as `Ok(None)`
//! by the resolver and never reaches this module.

use crate::resolver::NodeKind;

/// Result type for path resolution
pub type PathResult<T> = Result<T, PathError>;

/// Failures raised while walking a document along a compiled path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A key lookup was required but the current node is not an object
    #[error("segment {position} (`{segment}`) expects an object but found {found}")]
    TypeMismatch {
        /// The segment that could not be applied
        segment: String,
        /// Zero-based segment position within the path
        position: usize,
        /// Kind of the node the lookup was attempted on
        found: NodeKind,
    },

    /// A position index addresses an entry past the end of the object
    #[error("index {index} out of range for `{key}` with {len} entries")]
    IndexOutOfRange {
        /// Key whose value was indexed
        key: String,
        /// Requested position
        index: usize,
        /// Number of entries available
        len: usize,
    },
}

impl PathError {
    /// Create a new `TypeMismatch` error
    pub fn type_mismatch(segment: impl Into<String>, position: usize, found: NodeKind) -> Self {
        Self::TypeMismatch {
            segment: segment.into(),
            position,
            found,
        }
    }

    /// Create a new `IndexOutOfRange` error
    pub fn index_out_of_range(key: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            key: key.into(),
            index,
            len,
        }
    }

    /// Whether this failure came from a position index rather than a key lookup
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let mismatch = PathError::type_mismatch("item", 2, NodeKind::Number);
        assert_eq!(
            mismatch.to_string(),
            "segment 2 (`item`) expects an object but found number"
        );

        let range = PathError::index_out_of_range("branches", 3, 1);
        assert_eq!(
            range.to_string(),
            "index 3 out of range for `branches` with 1 entries"
        );
        assert!(range.is_index_error());
        assert!(!mismatch.is_index_error());
    }
}
