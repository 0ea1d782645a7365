//! Error types for the formscan-core library.
//!
//! The text pipeline itself never fails; these errors cover configuration
//! loading and request decoding at the edges.

use thiserror::Error;

/// Main error type for the formscan library.
#[derive(Error, Debug)]
pub enum FormscanError {
    /// Invalid request payload.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while decoding a processing request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The payload has no usable `text` field.
    #[error("No text provided")]
    MissingText,

    /// The payload is not valid JSON.
    #[error("malformed request body: {0}")]
    Malformed(String),
}

/// Result type for the formscan library.
pub type Result<T> = std::result::Result<T, FormscanError>;
