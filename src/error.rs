//! Error types for itemforge
//!
//! Uses `thiserror` for library errors. The load pipeline itself never
//! surfaces a fatal error: per-file problems degrade into events and result
//! counters. These variants cover the library surface around the pipeline
//! (configuration, definition scanning).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for itemforge operations
pub type ItemforgeResult<T> = Result<T, ItemforgeError>;

/// Main error type for itemforge operations
#[derive(Error, Debug)]
pub enum ItemforgeError {
    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Definition document could not be parsed
    #[error("invalid item definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
