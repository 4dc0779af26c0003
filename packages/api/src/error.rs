//! Document error types
//!
//! A missing key is not an error; getters report it as `Ok(None)`.

use keypath_core::{ConfigurationError, PathError};

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Failures raised by [`JsonDocument`](crate::JsonDocument)
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to decode JSON document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to read JSON document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document of {size} bytes exceeds the {limit} byte limit")]
    DocumentTooLarge { size: usize, limit: usize },

    #[error("Path of {len} bytes exceeds the {limit} byte limit")]
    PathTooLong { len: usize, limit: usize },

    #[error("Path has {count} segments, more than the limit of {limit}")]
    TooManySegments { count: usize, limit: usize },

    #[error("Failed to resolve '{path}': {source}")]
    Resolve {
        path: String,
        #[source]
        source: PathError,
    },

    #[error("Value at '{path}' does not deserialize into {target}: {source}")]
    Deserialize {
        path: String,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

impl DocumentError {
    /// Create a new Resolve error
    pub fn resolve(path: impl Into<String>, source: PathError) -> Self {
        Self::Resolve {
            path: path.into(),
            source,
        }
    }

    /// The underlying path failure, if this error came from resolution
    #[must_use]
    pub fn path_error(&self) -> Option<&PathError> {
        match self {
            Self::Resolve { source, .. } => Some(source),
            _ => None,
        }
    }
}
