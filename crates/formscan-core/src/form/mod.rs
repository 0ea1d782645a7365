//! Fixed-layout form field extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, FixedFormParser};

use crate::models::form::FormRecord;

/// Extracts form fields from already-normalized text.
pub trait FormExtractor {
    /// Extract all canonical fields. Fields that cannot be resolved are empty.
    fn extract(&self, cleaned: &str) -> FormRecord;
}

/// Runs the whole pipeline on raw OCR text.
pub trait FormParser {
    /// Normalize and extract. Never fails.
    fn parse(&self, raw: &str) -> ExtractionResult;
}
