//! Garbage-line classification.
//!
//! A garbage line is OCR noise rather than form data: blank lines, bare
//! numbers, UI captions such as "Submit", and page markers.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::patterns::PAGE_NUMBER;
use crate::models::config::GarbageConfig;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: GarbageClassifier = GarbageClassifier::new();
}

/// Case-insensitive garbage-line predicate.
#[derive(Debug, Clone)]
pub struct GarbageClassifier {
    ui_words: HashSet<String>,
}

impl GarbageClassifier {
    /// Create a classifier with the built-in UI words.
    pub fn new() -> Self {
        Self::from_config(&GarbageConfig::default())
    }

    /// Create a classifier from configuration.
    pub fn from_config(config: &GarbageConfig) -> Self {
        Self {
            ui_words: config
                .ui_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whether a line is noise.
    pub fn is_garbage(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();

        if line.is_empty() {
            return true;
        }

        if line.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }

        if self.ui_words.contains(&line) {
            return true;
        }

        PAGE_NUMBER.is_match(&line)
    }
}

impl Default for GarbageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a line with the built-in UI words.
pub fn is_garbage_line(line: &str) -> bool {
    DEFAULT_CLASSIFIER.is_garbage(line)
}
