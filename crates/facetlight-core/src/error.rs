//! Error types for facetlight-core.
//!
//! Only configuration problems are errors. A response without spelling
//! data or a facet with no values is a legitimate "nothing to render"
//! outcome and never surfaces here.

use std::path::{Path, PathBuf};

/// Result type alias for Facetlight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or loading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No field configuration matches the key and no default is configured.
    #[error("No facet configuration for field: {key}")]
    ConfigNotFound {
        /// Field key that was looked up
        key: String,
    },

    /// A component override names a component that is not registered.
    #[error("Invalid component override for field '{key}': {name}")]
    InvalidComponentOverride {
        /// Field whose configuration carries the override
        key: String,
        /// Override value as configured
        name: String,
    },

    /// A presenter override names a presenter that is not registered.
    #[error("Invalid presenter override for field '{key}': {name}")]
    InvalidPresenterOverride {
        /// Field whose configuration carries the override
        key: String,
        /// Override value as configured
        name: String,
    },

    /// Configuration is structurally valid but semantically wrong.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error while reading a configuration file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML configuration could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// JSON response payload could not be deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a `ConfigNotFound` error for the given key.
    pub fn config_not_found<S: Into<String>>(key: S) -> Self {
        Error::ConfigNotFound { key: key.into() }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` for errors caused by an override naming an
    /// unregistered component or presenter.
    pub fn is_invalid_override(&self) -> bool {
        matches!(
            self,
            Error::InvalidComponentOverride { .. } | Error::InvalidPresenterOverride { .. }
        )
    }
}
