//! Resolver Configuration
//!
//! Index semantics and path limits, with validation.

use serde::{Deserialize, Serialize};

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Default cap on raw path length in bytes
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Default cap on the number of dot-separated segments
pub const DEFAULT_MAX_SEGMENTS: usize = 256;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidParameter` - if a limit is zero
    /// - `Conflict` - if limits contradict each other
    fn validate(&self) -> ConfigResult<()>;
}

/// What a `key[index]` subscript may select from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// The index picks the N-th entry of an object by declaration order.
    /// Any other value under `key` falls back to a plain key lookup.
    #[default]
    ObjectEntries,
    /// Like `ObjectEntries`, and additionally indexes JSON arrays by position.
    Sequences,
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub index_mode: IndexMode,
    pub max_path_len: usize,
    pub max_segments: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            index_mode: IndexMode::default(),
            max_path_len: DEFAULT_MAX_PATH_LEN,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl ResolverConfig {
    /// Set the index mode
    #[must_use]
    pub fn with_index_mode(mut self, index_mode: IndexMode) -> Self {
        self.index_mode = index_mode;
        self
    }

    /// Set the maximum raw path length in bytes
    #[must_use]
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    /// Set the maximum number of segments
    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }
}

impl Validator for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_path_len == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_path_len cannot be zero".to_string(),
            ));
        }

        if self.max_segments == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_segments cannot be zero".to_string(),
            ));
        }

        // A path of n bytes has at most n + 1 segments.
        if self.max_segments > self.max_path_len.saturating_add(1) {
            return Err(ConfigurationError::Conflict(format!(
                "max_segments ({}) exceeds what max_path_len ({}) allows",
                self.max_segments, self.max_path_len
            )));
        }

        Ok(())
    }
}
