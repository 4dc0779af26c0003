//! Core `JsonDocument` structure
//!
//! Owns the decoded root, the document configuration and the resolver, and
//! provides the untyped `get` every typed getter builds on.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use keypath_core::{Resolver, Validator, compile};
use serde_json::{Map, Value};

use crate::config::DocumentConfig;
use crate::error::{DocumentError, DocumentResult};

/// A decoded JSON document addressable by dotted paths
#[derive(Clone, Default)]
pub struct JsonDocument {
    root: Value,
    config: DocumentConfig,
    resolver: Resolver,
}

impl JsonDocument {
    /// Wrap an already decoded value. Any JSON value may be the root.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self {
            root,
            config: DocumentConfig::default(),
            resolver: Resolver::new(),
        }
    }

    /// Wrap an existing object
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self::from_value(Value::Object(map))
    }

    /// Decode a document from raw bytes with the default configuration
    ///
    /// # Errors
    ///
    /// - `DocumentError::DocumentTooLarge` if `bytes` exceeds the size limit
    /// - `DocumentError::Decode` if `bytes` is not valid JSON
    pub fn from_slice(bytes: &[u8]) -> DocumentResult<Self> {
        Self::from_slice_with_config(bytes, DocumentConfig::default())
    }

    /// Decode a document from raw bytes with a custom configuration
    ///
    /// # Errors
    ///
    /// - `DocumentError::Config` if `config` is invalid
    /// - `DocumentError::DocumentTooLarge` if `bytes` exceeds the size limit
    /// - `DocumentError::Decode` if `bytes` is not valid JSON
    pub fn from_slice_with_config(bytes: &[u8], config: DocumentConfig) -> DocumentResult<Self> {
        config.validate()?;

        if bytes.len() > config.max_document_bytes {
            return Err(DocumentError::DocumentTooLarge {
                size: bytes.len(),
                limit: config.max_document_bytes,
            });
        }

        let root: Value = serde_json::from_slice(bytes).map_err(|e| {
            log::debug!("JSON document decode failed at line {} column {}", e.line(), e.column());
            DocumentError::Decode(e)
        })?;

        if config.debug {
            log::debug!("Decoded JSON document of {} bytes", bytes.len());
        }

        Self::from_value(root).with_config(config)
    }

    /// Decode a document from a reader, honouring the default size limit
    ///
    /// # Errors
    ///
    /// - `DocumentError::Io` if reading fails
    /// - `DocumentError::Decode` if the input is not valid JSON
    /// - `DocumentError::DocumentTooLarge` if the input exceeds the size limit
    pub fn from_reader<R: Read>(reader: R) -> DocumentResult<Self> {
        Self::from_reader_with_config(reader, DocumentConfig::default())
    }

    /// Decode a document from a reader with a custom configuration.
    /// Reads at most one byte past `max_document_bytes`.
    ///
    /// # Errors
    ///
    /// - `DocumentError::Config` if `config` is invalid
    /// - `DocumentError::Io` if reading fails
    /// - `DocumentError::DocumentTooLarge` if the input exceeds the size limit
    /// - `DocumentError::Decode` if the input is not valid JSON
    pub fn from_reader_with_config<R: Read>(
        reader: R,
        config: DocumentConfig,
    ) -> DocumentResult<Self> {
        config.validate()?;

        let limit = u64::try_from(config.max_document_bytes)
            .map_or(u64::MAX, |l| l.saturating_add(1));
        let mut bytes = Vec::new();
        reader.take(limit).read_to_end(&mut bytes)?;
        Self::from_slice_with_config(&bytes, config)
    }

    /// Apply a configuration to this document
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Config` if `config` fails validation.
    pub fn with_config(mut self, config: DocumentConfig) -> DocumentResult<Self> {
        config.validate()?;
        self.resolver = Resolver::with_config(config.resolver.clone());
        self.config = config;
        Ok(self)
    }

    /// The decoded root node
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Take ownership of the decoded root
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Retrieve the node at `path`
    ///
    /// ```rust
    /// # use keypath::JsonDocument;
    /// # use serde_json::json;
    /// let doc = JsonDocument::from_value(json!({"root": {"branches": {"b": {"item": 5}}}}));
    /// assert_eq!(doc.get("root.branches[0].item")?, Some(&json!(5)));
    /// # Ok::<(), keypath::DocumentError>(())
    /// ```
    ///
    /// # Returns
    /// `Ok(None)` when a key along the path is missing.
    ///
    /// # Errors
    ///
    /// - `DocumentError::PathTooLong` / `TooManySegments` if `path` exceeds limits
    /// - `DocumentError::Resolve` on a type mismatch or an index out of range
    pub fn get(&self, path: &str) -> DocumentResult<Option<&Value>> {
        self.check_path_limits(path)?;

        let found = self
            .resolver
            .resolve(&self.root, compile(path))
            .map_err(|source| DocumentError::resolve(path, source))?;

        if self.config.debug {
            log::debug!(
                "Lookup '{}' -> {}",
                path,
                if found.is_some() { "found" } else { "not found" }
            );
        }

        Ok(found)
    }

    /// Whether `path` resolves to a node
    ///
    /// # Errors
    ///
    /// Same failures as [`JsonDocument::get`].
    pub fn contains(&self, path: &str) -> DocumentResult<bool> {
        Ok(self.get(path)?.is_some())
    }

    fn check_path_limits(&self, path: &str) -> DocumentResult<()> {
        let limits = &self.config.resolver;

        if path.len() > limits.max_path_len {
            return Err(DocumentError::PathTooLong {
                len: path.len(),
                limit: limits.max_path_len,
            });
        }

        let count = compile(path).segment_count();
        if count > limits.max_segments {
            tracing::debug!(path, count, limit = limits.max_segments, "path rejected");
            return Err(DocumentError::TooManySegments {
                count,
                limit: limits.max_segments,
            });
        }

        Ok(())
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

impl From<Map<String, Value>> for JsonDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl TryFrom<&[u8]> for JsonDocument {
    type Error = DocumentError;

    fn try_from(bytes: &[u8]) -> DocumentResult<Self> {
        Self::from_slice(bytes)
    }
}

impl FromStr for JsonDocument {
    type Err = DocumentError;

    fn from_str(s: &str) -> DocumentResult<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl fmt::Debug for JsonDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDocument")
            .field("root_kind", &keypath_core::NodeKind::of(&self.root))
            .field("index_mode", &self.config.resolver.index_mode)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for JsonDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypath_core::ResolverConfig;
    use serde_json::json;

    #[test]
    fn test_from_slice_and_get() {
        let doc = JsonDocument::from_slice(br#"{"a": {"b": true}}"#).expect("valid json");
        assert_eq!(doc.get("a.b").expect("resolves"), Some(&json!(true)));
        assert!(doc.contains("a").expect("resolves"));
        assert!(!doc.contains("z").expect("resolves"));
    }

    #[test]
    fn test_decode_failure() {
        let err = JsonDocument::from_slice(b"{not json").expect_err("invalid json");
        assert!(matches!(err, DocumentError::Decode(_)));
    }

    #[test]
    fn test_size_limit() {
        let config = DocumentConfig::default().with_max_document_bytes(4);
        let err = JsonDocument::from_slice_with_config(br#"{"a": 1}"#, config)
            .expect_err("too large");
        assert!(matches!(
            err,
            DocumentError::DocumentTooLarge { size: 8, limit: 4 }
        ));
    }

    #[test]
    fn test_path_limits() {
        let config = DocumentConfig::default().with_resolver(
            ResolverConfig::default()
                .with_max_path_len(8)
                .with_max_segments(2),
        );
        let doc = JsonDocument::from_value(json!({"a": {"b": {"c": 1}}}))
            .with_config(config)
            .expect("valid config");

        assert!(matches!(
            doc.get("a.b.c"),
            Err(DocumentError::TooManySegments { count: 3, limit: 2 })
        ));
        assert!(matches!(
            doc.get("abcdefghij"),
            Err(DocumentError::PathTooLong { len: 10, limit: 8 })
        ));
        assert_eq!(doc.get("a.b").expect("within limits"), Some(&json!({"c": 1})));
    }

    #[test]
    fn test_into_inner_returns_root() {
        let value = json!({"k": [1, 2]});
        let doc = JsonDocument::from(value.clone());
        assert_eq!(doc.root(), &value);
        assert_eq!(doc.into_inner(), value);
    }
}
