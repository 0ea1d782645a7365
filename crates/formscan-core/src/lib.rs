//! Core library for scanned-form OCR cleanup.
//!
//! This crate provides:
//! - Text normalization for noisy OCR output (quotes, bracketed tags, UI glyphs)
//! - Garbage-line classification and multi-line address cleanup
//! - Fixed-layout field extraction (name, date of birth, account type, phone,
//!   email, address)
//! - Request/response types for services wrapping the pipeline
//!
//! The OCR engine itself is out of scope: everything here starts from the raw
//! text an engine produced.

pub mod error;
pub mod form;
pub mod models;
pub mod normalize;

pub use error::{FormscanError, RequestError, Result};
pub use form::{ExtractionResult, FixedFormParser, FormExtractor, FormParser};
pub use form::rules::{clean_address, is_garbage_line, GarbageClassifier, LineSequence};
pub use models::config::{FieldSchema, FormscanConfig, GarbageConfig, NormalizerConfig};
pub use models::form::{FormField, FormRecord};
pub use models::request::{ProcessRequest, ProcessResponse};
pub use normalize::{normalize, Normalizer};
