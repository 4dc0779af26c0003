//! # keypath core
//!
//! Dotted-path compiler and tree resolver for decoded JSON documents.
//!
//! A path such as `root.branches[0].item` is split on `.` into segments. Each
//! segment compiles lazily into a [`Step`] holding a key and an optional
//! position index, and the [`Resolver`] walks a [`serde_json::Value`] one step
//! at a time.
//!
//! ## Outcomes
//!
//! - `Ok(Some(node))` - the path resolved to `node`
//! - `Ok(None)` - a key along the path does not exist
//! - `Err(PathError)` - the document shape contradicts the path (a non-object
//!   where a key lookup was needed, or a position index past the last entry)
//!
//! Malformed subscripts such as `key[abc]` are never errors; they behave like
//! the bare `key`.
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({"root": {"branches": {"first": {"item": 5}}}});
//! let found = keypath_core::resolve(&doc, keypath_core::compile("root.branches[0].item"));
//! assert_eq!(found.ok().flatten(), Some(&json!(5)));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod path;
pub mod resolver;

pub use config::{
    ConfigResult, ConfigurationError, IndexMode, ResolverConfig, Validator,
};
pub use error::{PathError, PathResult};
pub use path::{PathCompiler, Step, compile};
pub use resolver::{NodeKind, Resolver, resolve};
