//! Error types for Termo
//!
//! Library errors use `thiserror`; the binary edge wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Termo operations
pub type TermoResult<T> = Result<T, TermoError>;

/// Main error type for Termo operations
#[derive(Error, Debug)]
pub enum TermoError {
    /// Input rejected before any computation (negative day counts,
    /// malformed dates, malformed holiday entries)
    #[error("invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// Store key not present in the configured store table
    #[error("unknown store '{key}' - known stores: {known}")]
    UnknownStore { key: String, known: String },

    /// Configuration file could not be read or parsed
    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TermoError {
    /// Shorthand for `InvalidArgument` with owned strings
    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
