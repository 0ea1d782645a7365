//! Label/value lookup: a value is the line right after its label.

use super::lines::LineSequence;
use super::{FieldExtractor, LabelMatch};

/// Resolves a single-line field from its label aliases.
///
/// Aliases are tried in order and only the first occurrence of each label is
/// considered. An alias whose label is the final line yields nothing, and
/// the next alias is tried.
pub struct LabelExtractor<'s> {
    labels: &'s [String],
}

impl<'s> LabelExtractor<'s> {
    /// Create an extractor for the given labels, in priority order.
    pub fn new(labels: &'s [String]) -> Self {
        Self { labels }
    }
}

impl FieldExtractor for LabelExtractor<'_> {
    type Output = LabelMatch<String>;

    fn extract(&self, lines: &LineSequence<'_>) -> Option<Self::Output> {
        self.labels.iter().find_map(|label| {
            let idx = lines.position(label)?;
            let value = lines.get(idx + 1)?;
            Some(LabelMatch::new(value.to_string(), label.as_str(), idx))
        })
    }
}

/// Value following the first matching label, if any.
pub fn value_after(lines: &LineSequence<'_>, labels: &[String]) -> Option<String> {
    LabelExtractor::new(labels).extract(lines).map(|m| m.value)
}

/// Remove a trailing run of dropdown-arrow characters from a value.
pub fn strip_dropdown_arrows(value: &str, arrows: &[char]) -> String {
    value.trim_end_matches(|c: char| arrows.contains(&c)).trim().to_string()
}
