//! Compiled path step
//!
//! One dot-separated segment decomposed into a key and an optional position
//! index. Subscript syntax is lenient: anything that is not `word[digits]`
//! simply yields no index.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Word run immediately followed by `[`
static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\[").expect("key pattern is a valid regex"));

/// Digit run enclosed in brackets, opened right after a word character
static INDEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w\[(\d+)\]").expect("index pattern is a valid regex"));

/// A single lookup step: an object key, optionally followed by an entry index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// Object key to look up
    pub key: String,
    /// Position of the entry to select inside the value under `key`
    pub index: Option<usize>,
}

impl Step {
    /// Create a plain key step
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            index: None,
        }
    }

    /// Create a key + index step
    pub fn indexed(key: impl Into<String>, index: usize) -> Self {
        Self {
            key: key.into(),
            index: Some(index),
        }
    }

    /// Decompose one path segment.
    ///
    /// The key capture and the index capture are independent:
    ///
    /// - `name` gives `(name, None)`
    /// - `name[2]` gives `(name, Some(2))`
    /// - `name[x]` and `name[` give `(name, None)`
    /// - `[2]` has no word run before the bracket, so it stays `([2], None)`
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        let key = KEY_PATTERN
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .map_or(segment, |m| m.as_str());

        // Digit runs too long for usize count as malformed.
        let index = INDEX_PATTERN
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<usize>().ok());

        Self {
            key: key.to_string(),
            index,
        }
    }

    /// A segment like `[2]` with no key before the bracket. Never matches.
    #[inline]
    #[must_use]
    pub fn is_bare_subscript(&self) -> bool {
        self.index.is_none() && self.key.starts_with('[')
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{index}]", self.key),
            None => f.write_str(&self.key),
        }
    }
}
