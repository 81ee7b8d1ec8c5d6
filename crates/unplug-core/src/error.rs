//! Core error types for unplug-core.
//!
//! Almost nothing in the interactive path is allowed to fail: bad input is
//! re-prompted, image failures become inline text and adapter failures are
//! swallowed. These types cover the seams where a failure does surface
//! (console I/O, config files, the web listener) and the internal results
//! that get mapped to friendly text before reaching the user.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for unplug-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Image open/decode errors
    #[error("{0}")]
    Image(#[from] image::ImageError),

    /// Outbound HTTP errors from suggestion adapters
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for interactive input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input could not be parsed as the expected number type
    #[error("'{input}' is not a valid number for {field}")]
    NotANumber { field: &'static str, input: String },

    /// Parsed value outside the accepted range
    #[error("Invalid value for '{field}': {message}")]
    OutOfRange { field: &'static str, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
