//! Document Configuration
//!
//! Decode limits plus the resolver settings used for every lookup.

use keypath_core::{ConfigResult, ConfigurationError, ResolverConfig, Validator};
use serde::{Deserialize, Serialize};

/// Default cap on encoded document size (64 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 64 * 1024 * 1024;

/// Document configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub resolver: ResolverConfig,
    pub max_document_bytes: usize,
    /// Log every lookup at debug level
    pub debug: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            debug: false,
        }
    }
}

impl DocumentConfig {
    /// Set the resolver configuration
    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set the maximum encoded document size in bytes
    #[must_use]
    pub fn with_max_document_bytes(mut self, max_document_bytes: usize) -> Self {
        self.max_document_bytes = max_document_bytes;
        self
    }

    /// Enable debug logging of lookups
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Validator for DocumentConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_document_bytes == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "max_document_bytes cannot be zero".to_string(),
            ));
        }

        self.resolver.validate()
    }
}
