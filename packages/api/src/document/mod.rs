//! Document API modules
//!
//! Decoding, path lookup and typed narrowing over an owned JSON tree.

pub mod accessors;
pub mod core;

pub use self::core::JsonDocument;
