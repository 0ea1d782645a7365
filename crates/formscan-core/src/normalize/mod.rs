//! OCR text normalization.
//!
//! Turns raw OCR output into text that only contains ASCII letters, digits,
//! whitespace and `. , : - / @`, with one trimmed, non-empty line per text
//! line. Normalization is total and idempotent.

pub mod steps;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::{FormscanError, Result};
use crate::models::config::NormalizerConfig;

use steps::{
    arrow_suffix_pattern, canonicalize_quotes, collapse_whitespace, keep_allowed_chars,
    remove_glyphs, remove_stray_arrows, strip_arrow_suffix, strip_bracketed,
};

lazy_static! {
    static ref DEFAULT_ARROW_SUFFIX: Option<Regex> =
        arrow_suffix_pattern(&NormalizerConfig::default()).unwrap();

    static ref DEFAULT_NORMALIZER: Normalizer = Normalizer::new();
}

/// Cleans raw OCR text according to a [`NormalizerConfig`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    arrow_suffix: Option<Regex>,
}

impl Normalizer {
    /// Create a normalizer with the built-in denylists.
    pub fn new() -> Self {
        Self {
            config: NormalizerConfig::default(),
            arrow_suffix: DEFAULT_ARROW_SUFFIX.clone(),
        }
    }

    /// Create a normalizer with custom denylists.
    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        let arrow_suffix = arrow_suffix_pattern(&config)
            .map_err(|e| FormscanError::Config(format!("invalid account-type keywords: {}", e)))?;

        Ok(Self {
            config,
            arrow_suffix,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize raw OCR text.
    pub fn normalize(&self, raw: &str) -> String {
        let text = canonicalize_quotes(raw);
        let text = strip_bracketed(&text);
        let text = self.remove_artifacts(&text);
        let text = keep_allowed_chars(&text);

        // Deleting characters can expose new artifacts ("v!" becomes "v").
        let text = self.remove_artifacts(&text);
        let text = collapse_whitespace(&text);

        trace!("Normalized {} bytes into {} bytes", raw.len(), text.len());
        text
    }

    fn remove_artifacts(&self, text: &str) -> String {
        let text = remove_glyphs(text, &self.config.artifact_glyphs);
        let text = remove_stray_arrows(&text, &self.config.dropdown_arrows);
        match &self.arrow_suffix {
            Some(pattern) => strip_arrow_suffix(&text, pattern),
            None => text,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize raw OCR text with the built-in configuration.
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use super::steps::is_allowed_char;

    const SAMPLES: &[&str] = &[
        "",
        "   \n\n \r\n",
        "Full Name\nJohn \"Q\" Smith [checkbox]\nAccount Type\nSavingsv\n",
        "Address\r\n742 Evergreen Terrace\r\r\nSpringfield 99\nSignature",
        "“Quoted” ‘text’ ► ▼ □ ■ ● ○ ✓ ✔ ✗ ✘",
        "José Müller; (née) O'Brien!?",
        "v!\nSav!ingsv\nsavingsvavingsv\nCHECKING ▾ v",
        "[a [b] c]\n[unclosed\nclosed]",
        "Email\n  jane.doe@example.com  \n\n\nPhone Number\n+1 (555) 010-9999",
        "\t\tName\u{00A0}\u{00A0}Line\u{2028}break",
        "日本語のテキスト\n✓✓✓",
    ];

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_only_artifacts() {
        assert_eq!(normalize("► ▼ □\n✓ [x] v V\n;;;"), "");
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(normalize("John \"Q\" Smith [checkbox]"), "John Q Smith");
        assert_eq!(normalize("“Jane” ‘J’ Roe"), "Jane J Roe");
    }

    #[test]
    fn test_stray_dropdown_letters() {
        assert_eq!(normalize("Account Type\nCurrent v"), "Account Type\nCurrent");
        assert_eq!(normalize("742 Evergreen Terrace"), "742 Evergreen Terrace");
        assert_eq!(normalize("Savingsv"), "Savings");
        assert_eq!(normalize("checking↓⌄"), "checking");
    }

    #[test]
    fn test_whitelist() {
        assert_eq!(normalize("José Müller; (née) O'Brien!?"), "Jos Mller ne OBrien");
        assert_eq!(
            normalize("jane.doe@example.com, 12/05/1990 - 10:30"),
            "jane.doe@example.com, 12/05/1990 - 10:30"
        );
    }

    #[test]
    fn test_line_cleanup() {
        assert_eq!(
            normalize("  Full   Name  \r\n\r\n\n  John Smith\n\n"),
            "Full Name\nJohn Smith"
        );
    }

    #[test]
    fn test_only_space_runs_collapse() {
        assert_eq!(normalize("John\tSmith"), "John\tSmith");
        assert_eq!(normalize("John \t  Smith"), "John \t Smith");
        assert_eq!(normalize("\tJohn\u{00A0}Smith\t"), "John\u{00A0}Smith");
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_allowed_characters_only() {
        for sample in SAMPLES {
            let cleaned = normalize(sample);
            assert!(
                cleaned.chars().all(|c| c == '\n' || is_allowed_char(c)),
                "disallowed character in {:?}",
                cleaned
            );
            assert!(!cleaned.contains('\r'));
        }
    }

    #[test]
    fn test_no_blank_lines() {
        for sample in SAMPLES {
            let cleaned = normalize(sample);
            if cleaned.is_empty() {
                continue;
            }
            for line in cleaned.split('\n') {
                assert!(!line.is_empty(), "blank line in {:?}", cleaned);
                assert_eq!(line, line.trim());
            }
        }
    }

    #[test]
    fn test_custom_config() {
        let config = NormalizerConfig {
            artifact_glyphs: vec!["☐".to_string()],
            dropdown_arrows: vec!['~'],
            account_type_keywords: vec!["business".to_string()],
        };
        let normalizer = Normalizer::with_config(config).unwrap();

        assert_eq!(normalizer.normalize("Business~~ ☐"), "Business");
        // Default stray letters are not configured here.
        assert_eq!(normalizer.normalize("Savings v"), "Savings v");
    }
}
