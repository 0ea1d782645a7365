//! Multi-line address accumulation and cleanup.

use super::garbage::GarbageClassifier;
use super::lines::LineSequence;
use super::patterns::{DOUBLE_COMMA, TRAILING_COMMA, TRAILING_NUMBER, TRAILING_SEPARATORS};
use super::{FieldExtractor, LabelMatch};

/// Collects the address block that follows an address label.
pub struct AddressExtractor<'s> {
    labels: &'s [String],
    classifier: &'s GarbageClassifier,
}

impl<'s> AddressExtractor<'s> {
    /// Create an extractor for the given labels, in priority order.
    pub fn new(labels: &'s [String], classifier: &'s GarbageClassifier) -> Self {
        Self { labels, classifier }
    }
}

impl FieldExtractor for AddressExtractor<'_> {
    type Output = LabelMatch<String>;

    fn extract(&self, lines: &LineSequence<'_>) -> Option<Self::Output> {
        let (label, line) = self
            .labels
            .iter()
            .find_map(|label| lines.position(label).map(|idx| (label, idx)))?;

        let block = collect_address_lines(lines.after(line), self.classifier);
        let address = clean_address_with(&block, self.classifier);

        Some(LabelMatch::new(address, label.as_str(), line))
    }
}

/// Take lines up to (not including) the first garbage line.
pub fn collect_address_lines<'a>(
    candidates: &[&'a str],
    classifier: &GarbageClassifier,
) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .take_while(|line| !classifier.is_garbage(line))
        .collect()
}

/// Join address lines into one comma-separated string with the built-in
/// garbage rules.
pub fn clean_address<S: AsRef<str>>(lines: &[S]) -> String {
    clean_address_with(lines, &GarbageClassifier::new())
}

/// Join address lines into one comma-separated string.
///
/// Garbage lines are skipped and trailing numbers and separators are cut from
/// each fragment.
pub fn clean_address_with<S: AsRef<str>>(lines: &[S], classifier: &GarbageClassifier) -> String {
    let parts: Vec<String> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !classifier.is_garbage(line))
        .filter_map(|line| {
            let line = TRAILING_NUMBER.replace(line, "");
            let line = TRAILING_SEPARATORS.replace(&line, "");
            (!line.is_empty()).then(|| line.into_owned())
        })
        .collect();

    let address = parts.join(", ");
    let address = DOUBLE_COMMA.replace_all(&address, ",");
    TRAILING_COMMA.replace(&address, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_stops_at_garbage() {
        let classifier = GarbageClassifier::new();
        let candidates = ["123 Main St", "Springfield, IL 62704", "Signature", "John Doe"];

        let block = collect_address_lines(&candidates, &classifier);
        assert_eq!(block, ["123 Main St", "Springfield, IL 62704"]);
        assert_eq!(clean_address(&block), "123 Main St, Springfield, IL");
    }

    #[test]
    fn test_trailing_numbers_stripped() {
        assert_eq!(
            clean_address(&["742 Evergreen Terrace", "Springfield 99"]),
            "742 Evergreen Terrace, Springfield"
        );
        // Only a number at the very end of the fragment is dropped.
        assert_eq!(clean_address(&["Flat 4, ", "Baker Street 221"]), "Flat 4, Baker Street");
    }

    #[test]
    fn test_garbage_and_empty_fragments_skipped() {
        assert_eq!(
            clean_address(&["", "  Oak Avenue  ", "Page 2", "12", ",,", "Portland"]),
            "Oak Avenue, Portland"
        );
        assert_eq!(clean_address::<&str>(&[]), "");
    }

    #[test]
    fn test_leading_comma_collapsed() {
        assert_eq!(clean_address(&["Elm Road", ", Riverside"]), "Elm Road, Riverside");
    }

    #[test]
    fn test_extractor_uses_first_label() {
        let classifier = GarbageClassifier::new();
        let labels = vec!["Address".to_string()];
        let lines = LineSequence::new("Name\nJo\nAddress\n1 Long Rd\nLeeds 4\nSubmit\nAddress\nX");

        let found = AddressExtractor::new(&labels, &classifier)
            .extract(&lines)
            .unwrap();
        assert_eq!(found.value, "1 Long Rd, Leeds");
        assert_eq!(found.line, 2);
    }

    #[test]
    fn test_extractor_label_missing() {
        let classifier = GarbageClassifier::new();
        let labels = vec!["Address".to_string()];
        let lines = LineSequence::new("Home Address\n1 Long Rd");

        assert!(AddressExtractor::new(&labels, &classifier).extract(&lines).is_none());
    }
}
