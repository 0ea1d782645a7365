//! Fixed-template form parser: normalization followed by label lookup.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::{FieldSchema, FormscanConfig};
use crate::models::form::{FormField, FormRecord};
use crate::models::request::{ProcessRequest, ProcessResponse};
use crate::normalize::Normalizer;

use super::rules::{
    strip_dropdown_arrows, AddressExtractor, FieldExtractor, GarbageClassifier, LabelExtractor,
    LabelMatch, LineSequence,
};
use super::{FormExtractor, FormParser};

/// Result of parsing one form.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: FormRecord,
    /// Text after normalization.
    pub cleaned_text: String,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for forms whose fields follow fixed label lines.
#[derive(Debug, Clone)]
pub struct FixedFormParser {
    normalizer: Normalizer,
    schema: FieldSchema,
    classifier: GarbageClassifier,
}

impl FixedFormParser {
    /// Create a parser with the built-in schema and denylists.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            schema: FieldSchema::default(),
            classifier: GarbageClassifier::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &FormscanConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::with_config(config.normalizer.clone())?,
            schema: config.extraction.clone(),
            classifier: GarbageClassifier::from_config(&config.garbage),
        })
    }

    /// Replace the field schema.
    pub fn with_schema(mut self, schema: FieldSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Normalize raw OCR text without extracting fields.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Answer a service request.
    pub fn respond(&self, request: &ProcessRequest) -> ProcessResponse {
        let result = self.parse(&request.text);
        ProcessResponse {
            input: request.text.clone(),
            cleaned: result.cleaned_text,
            results: result.record,
        }
    }

    fn resolve(&self, field: FormField, lines: &LineSequence<'_>) -> Option<LabelMatch<String>> {
        let labels = self.schema.labels(field);
        match field {
            FormField::Address => AddressExtractor::new(labels, &self.classifier).extract(lines),
            FormField::AccountType => LabelExtractor::new(labels).extract(lines).map(|mut m| {
                m.value = strip_dropdown_arrows(&m.value, &self.normalizer.config().dropdown_arrows);
                m
            }),
            _ => LabelExtractor::new(labels).extract(lines),
        }
    }
}

impl Default for FixedFormParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FormExtractor for FixedFormParser {
    fn extract(&self, cleaned: &str) -> FormRecord {
        let lines = LineSequence::new(cleaned);
        let mut record = FormRecord::default();

        for field in FormField::ALL {
            if let Some(found) = self.resolve(field, &lines) {
                debug!(
                    "Resolved {} from label {:?} on line {}",
                    field, found.label, found.line
                );
                record.set(field, found.value);
            }
        }

        record
    }
}

impl FormParser for FixedFormParser {
    fn parse(&self, raw: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing form from {} characters of text", raw.chars().count());

        let cleaned_text = self.normalizer.normalize(raw);
        debug!("Cleaned text:\n{}", cleaned_text);

        let record = self.extract(&cleaned_text);

        let warnings: Vec<String> = record
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field.display_name().to_lowercase()))
            .collect();

        debug!(
            "Extracted {} of {} fields",
            FormField::ALL.len() - warnings.len(),
            FormField::ALL.len()
        );

        ExtractionResult {
            record,
            cleaned_text,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
