//! Ordered sequence of non-blank lines.

/// Trimmed, non-empty lines of a text in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineSequence<'a> {
    /// Split text into trimmed lines, dropping blank ones.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Index of the first line exactly equal to `label` (case-sensitive).
    pub fn position(&self, label: &str) -> Option<usize> {
        self.lines.iter().position(|line| *line == label)
    }

    /// Lines strictly after `index`.
    pub fn after(&self, index: usize) -> &[&'a str] {
        self.lines.get(index + 1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped() {
        let lines = LineSequence::new("  Name \n\n   \r\nJane Roe\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get(0), Some("Name"));
        assert_eq!(lines.get(1), Some("Jane Roe"));
        assert!(LineSequence::new("").is_empty());
    }

    #[test]
    fn test_position_first_occurrence() {
        let lines = LineSequence::new("Email\na@example.com\nEmail\nb@example.com");
        assert_eq!(lines.position("Email"), Some(0));
        assert_eq!(lines.position("email"), None);
    }

    #[test]
    fn test_after() {
        let lines = LineSequence::new("a\nb\nc");
        assert_eq!(lines.after(0), ["b", "c"]);
        assert!(lines.after(2).is_empty());
        assert!(lines.after(10).is_empty());
    }
}
