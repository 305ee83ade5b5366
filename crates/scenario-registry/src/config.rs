//! Registry configuration
//!
//! [`RegistryConfig`] can be built in code with the `with_*` methods or
//! loaded from TOML:
//!
//! ```toml
//! default_host = "localhost"
//! resource_prefix = "/stubo/api/v2/scenarios/objects"
//! store = "ordered"
//! ```

use scenario_name::HostName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resource prefix used when none is configured
pub const DEFAULT_RESOURCE_PREFIX: &str = "/scenarios/objects";

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Lock-sharded by canonical name
    #[default]
    Sharded,
    /// Single lock, insertion ordered
    Ordered,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Host applied to unqualified scenario names
    pub default_host: HostName,
    /// Path prefix for scenario resource references
    pub resource_prefix: String,
    /// Store backend
    pub store: StoreKind,
}

impl RegistryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default host
    #[inline]
    #[must_use]
    pub fn with_default_host(mut self, host: HostName) -> Self {
        self.default_host = host;
        self
    }

    /// With resource prefix
    #[inline]
    #[must_use]
    pub fn with_resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = prefix.into();
        self
    }

    /// With store backend
    #[inline]
    #[must_use]
    pub fn with_store(mut self, store: StoreKind) -> Self {
        self.store = store;
        self
    }

    /// Parse and validate a TOML document
    ///
    /// Missing keys take their defaults. An invalid `default_host` fails
    /// here rather than on first use.
    ///
    /// # Errors
    /// Returns [`ConfigError`] on malformed TOML, unknown keys, an invalid
    /// host or an invalid prefix.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check invariants not expressible in the types
    ///
    /// # Errors
    /// [`ConfigError::InvalidPrefix`] if the prefix is not an absolute path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.resource_prefix.starts_with('/') {
            return Err(ConfigError::InvalidPrefix(self.resource_prefix.clone()));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_host: HostName::localhost(),
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
            store: StoreKind::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, unknown key, or invalid host
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Prefix is not an absolute path
    #[error("resource prefix must start with '/': {0:?}")]
    InvalidPrefix(String),
}
