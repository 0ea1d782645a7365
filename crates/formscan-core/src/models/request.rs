//! Payloads exchanged with services that wrap the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::models::form::FormRecord;

/// A request to process one block of OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Raw OCR text.
    pub text: String,
}

impl ProcessRequest {
    /// Create a request from raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode a JSON body of the form `{ "text": "..." }`.
    ///
    /// A missing, null or non-string `text` is reported as
    /// [`RequestError::MissingText`]; a body that is not JSON at all as
    /// [`RequestError::Malformed`].
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| RequestError::Malformed(e.to_string()))?;

        match value.get("text").and_then(|t| t.as_str()) {
            Some(text) => Ok(Self::new(text)),
            None => Err(RequestError::MissingText),
        }
    }
}

/// Result of processing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Text as received.
    pub input: String,

    /// Text after normalization.
    pub cleaned: String,

    /// Extracted fields.
    pub results: FormRecord,
}
