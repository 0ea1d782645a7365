//! Common regex patterns for form line cleanup.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "page 3", "Page12" (whole line)
    pub static ref PAGE_NUMBER: Regex = Regex::new(r"(?i)^page\s*\d+$").unwrap();

    // Stray page/line numbers OCR appends to address fragments
    pub static ref TRAILING_NUMBER: Regex = Regex::new(r"\s*\d+\s*$").unwrap();

    pub static ref TRAILING_SEPARATORS: Regex = Regex::new(r"[,\s]+$").unwrap();

    pub static ref DOUBLE_COMMA: Regex = Regex::new(r",\s*,").unwrap();

    pub static ref TRAILING_COMMA: Regex = Regex::new(r",\s*$").unwrap();
}
