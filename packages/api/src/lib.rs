//! Keypath Public API
//!
//! Dotted-path access into decoded JSON documents with typed getters.
//! A path like `root.branches[0].item` walks object keys left to right; a
//! `[n]` subscript picks the n-th entry of the object under that key.
//!
//! ```rust
//! use keypath::JsonDocument;
//!
//! let doc: JsonDocument = r#"{"root": {"branches": {"a": {"item": 5}}}}"#.parse()?;
//! assert_eq!(doc.get_i64("root.branches[0].item")?, Some(5));
//! assert_eq!(doc.get_str("root.branches[0].item")?, None);
//! assert_eq!(doc.get("root.missing")?, None);
//! # Ok::<(), keypath::DocumentError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod document;
pub mod error;

pub use config::DocumentConfig;
pub use document::JsonDocument;
pub use error::{DocumentError, DocumentResult};

// Re-export important types from the core package
pub use keypath_core::{
    ConfigurationError, IndexMode, NodeKind, PathCompiler, PathError, Resolver, ResolverConfig,
    Step, Validator, compile, resolve,
};
pub use serde_json::{Map, Value};
