//! Core error types for freshkeep-core.
//!
//! Store mutations never fail; these errors cover the access boundary
//! around the store, configuration, and parsing of user input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for freshkeep-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The store was accessed through a handle whose provider is gone.
    #[error("store accessed outside of its provider")]
    OutsideProvider,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to locate or create the configuration directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors for user-supplied values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Category label outside the closed set
    #[error("unknown food category '{0}'")]
    UnknownCategory(String),

    /// Recipe variant other than core/extended
    #[error("unknown recipe variant '{0}' (expected 'core' or 'extended')")]
    UnknownVariant(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
