//! Line-based rules for fixed-layout forms.

pub mod address;
pub mod garbage;
pub mod labels;
pub mod lines;
pub mod patterns;

pub use address::{clean_address, clean_address_with, collect_address_lines, AddressExtractor};
pub use garbage::{is_garbage_line, GarbageClassifier};
pub use labels::{strip_dropdown_arrows, value_after, LabelExtractor};
pub use lines::LineSequence;

/// Trait for field extractors working on a [`LineSequence`].
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field, or `None` when its label is absent.
    fn extract(&self, lines: &LineSequence<'_>) -> Option<Self::Output>;
}

/// A value together with the label that located it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Label line that matched.
    pub label: String,
    /// Index of the label line.
    pub line: usize,
}

impl<T> LabelMatch<T> {
    pub fn new(value: T, label: impl Into<String>, line: usize) -> Self {
        Self {
            value,
            label: label.into(),
            line,
        }
    }
}
