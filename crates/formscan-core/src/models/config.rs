//! Configuration structures for the cleaning and extraction pipeline.
//!
//! All defaults are compiled in; a JSON file only overrides them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::form::FormField;

/// Main configuration for the formscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormscanConfig {
    /// Text normalization configuration.
    pub normalizer: NormalizerConfig,

    /// Field labels of the form template.
    pub extraction: FieldSchema,

    /// Garbage-line classification configuration.
    pub garbage: GarbageConfig,

    /// HTTP service configuration.
    pub server: ServerConfig,
}

/// Artifact denylists used by the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Glyphs left behind by checkboxes, bullets and arrows. Deleted everywhere.
    pub artifact_glyphs: Vec<String>,

    /// Characters OCR produces when it reads a dropdown arrow.
    ///
    /// A whitespace-delimited token made only of these is dropped, and a run
    /// of them glued to an account-type keyword is stripped.
    pub dropdown_arrows: Vec<char>,

    /// Account-type keywords matched case-insensitively.
    pub account_type_keywords: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            artifact_glyphs: [
                "►", "▼", "□", "■", "●", "○", "✓", "✔", "✗", "✘", "▾", "▿", "↓", "⌄", "∨",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            dropdown_arrows: vec!['v', 'V', '▾', '▿', '↓', '⌄', '∨'],
            account_type_keywords: vec![
                "savings".to_string(),
                "current".to_string(),
                "checking".to_string(),
            ],
        }
    }
}

/// Labels accepted for one field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabels {
    /// Canonical field.
    pub field: FormField,

    /// Label lines, highest priority first.
    pub labels: Vec<String>,
}

impl FieldLabels {
    fn new(field: FormField, labels: &[&str]) -> Self {
        Self {
            field,
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Fixed mapping from canonical field to its accepted label strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    /// One entry per field.
    pub fields: Vec<FieldLabels>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldLabels::new(FormField::Name, &["Full Name", "Name"]),
                FieldLabels::new(FormField::Dob, &["Date of Birth", "DOB"]),
                FieldLabels::new(FormField::AccountType, &["Account Type"]),
                FieldLabels::new(FormField::Phone, &["Phone Number", "Mobile"]),
                FieldLabels::new(FormField::Email, &["Email", "Email Address"]),
                FieldLabels::new(FormField::Address, &["Address"]),
            ],
        }
    }
}

impl FieldSchema {
    /// Labels configured for a field. Empty if the schema omits it.
    pub fn labels(&self, field: FormField) -> &[String] {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.labels.as_slice())
            .unwrap_or(&[])
    }
}

/// Words that mark a line as UI noise rather than form data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GarbageConfig {
    /// Whole-line UI words, compared case-insensitively.
    pub ui_words: Vec<String>,
}

impl Default for GarbageConfig {
    fn default() -> Self {
        Self {
            ui_words: [
                "submit", "cancel", "signature", "date", "sign", "here", "click", "next",
                "previous", "continue", "back", "done",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// HTTP service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
        }
    }
}

impl FormscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
