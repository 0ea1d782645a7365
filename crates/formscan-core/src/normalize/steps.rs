//! Individual cleaning passes applied by the [`Normalizer`](super::Normalizer).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::config::NormalizerConfig;

lazy_static! {
    // Non-greedy and single-line: `.` does not cross newlines.
    static ref BRACKETED: Regex = Regex::new(r"\[.*?\]").unwrap();

    static ref LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();

    // Plain spaces only; tabs and other whitespace are kept as written.
    static ref SPACE_RUN: Regex = Regex::new(r" +").unwrap();
}

/// Map curly/smart quotes to their ASCII equivalents.
pub fn canonicalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
            other => other,
        })
        .collect()
}

/// Remove `[...]` annotations such as checkbox markers or confidence tags.
///
/// Unbalanced brackets are left alone.
pub fn strip_bracketed(text: &str) -> String {
    BRACKETED.replace_all(text, "").into_owned()
}

/// Delete every occurrence of each glyph.
pub fn remove_glyphs(text: &str, glyphs: &[String]) -> String {
    let mut text = text.to_string();
    for glyph in glyphs.iter().filter(|g| !g.is_empty()) {
        if text.contains(glyph.as_str()) {
            text = text.replace(glyph.as_str(), "");
        }
    }
    text
}

/// Drop whitespace-delimited tokens made only of dropdown-arrow characters.
///
/// Surrounding whitespace is kept so neighbouring words never merge.
pub fn remove_stray_arrows(text: &str, arrows: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            flush_token(&mut out, &mut token, arrows);
            out.push(c);
        } else {
            token.push(c);
        }
    }
    flush_token(&mut out, &mut token, arrows);

    out
}

fn flush_token(out: &mut String, token: &mut String, arrows: &[char]) {
    if !token.chars().all(|c| arrows.contains(&c)) {
        out.push_str(token);
    }
    token.clear();
}

/// Build the `keyword + arrow run` pattern for account-type values.
///
/// Returns `None` when there is nothing to match.
pub fn arrow_suffix_pattern(config: &NormalizerConfig) -> Result<Option<Regex>, regex::Error> {
    let keywords: Vec<String> = config
        .account_type_keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(k))
        .collect();

    if keywords.is_empty() || config.dropdown_arrows.is_empty() {
        return Ok(None);
    }

    let arrows: String = config
        .dropdown_arrows
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();

    Regex::new(&format!(r"(?i)({})[{}]+", keywords.join("|"), arrows)).map(Some)
}

/// Strip arrow runs glued to account-type keywords, keeping the keyword.
///
/// Repeats until nothing changes: removing a run can line up a new
/// keyword with a following run.
pub fn strip_arrow_suffix(text: &str, pattern: &Regex) -> String {
    let mut current = text.to_string();
    loop {
        let next = pattern.replace_all(&current, "${1}").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Whether a character survives the whitelist filter.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '.' | ',' | ':' | '-' | '/' | '@')
}

/// Delete every character outside the whitelist.
pub fn keep_allowed_chars(text: &str) -> String {
    text.chars().filter(|c| is_allowed_char(*c)).collect()
}

/// Normalize line breaks, collapse space runs, trim lines and drop blank ones.
pub fn collapse_whitespace(text: &str) -> String {
    let text = LINE_BREAKS.replace_all(text, "\n");
    let text = SPACE_RUN.replace_all(&text, " ");

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_bracketed_is_non_greedy() {
        assert_eq!(strip_bracketed("a [x] b [y] c"), "a  b  c");
        assert_eq!(strip_bracketed("[ ] Savings [x] Current"), " Savings  Current");
    }

    #[test]
    fn test_strip_bracketed_single_line_only() {
        assert_eq!(strip_bracketed("open [\nclose]"), "open [\nclose]");
        assert_eq!(strip_bracketed("unbalanced [ here"), "unbalanced [ here");
    }

    #[test]
    fn test_remove_stray_arrows() {
        let arrows = ['v', 'V', '▾'];
        assert_eq!(remove_stray_arrows("Savings v", &arrows), "Savings ");
        assert_eq!(remove_stray_arrows("vV\nEvergreen", &arrows), "\nEvergreen");
        assert_eq!(remove_stray_arrows("Gov ▾ office", &arrows), "Gov  office");
    }

    #[test]
    fn test_arrow_suffix_pattern() {
        let pattern = arrow_suffix_pattern(&NormalizerConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(strip_arrow_suffix("Savingsv", &pattern), "Savings");
        assert_eq!(strip_arrow_suffix("CHECKING▾▾", &pattern), "CHECKING");
        assert_eq!(strip_arrow_suffix("savingsvavingsv", &pattern), "savingsavings");
        assert_eq!(strip_arrow_suffix("Current account", &pattern), "Current account");
    }

    #[test]
    fn test_arrow_suffix_pattern_empty_config() {
        let config = NormalizerConfig {
            account_type_keywords: Vec::new(),
            ..Default::default()
        };
        assert!(arrow_suffix_pattern(&config).unwrap().is_none());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Full   Name \r\n\r\n\tJohn\t Smith  \n \n"),
            "Full Name\nJohn\t Smith"
        );
        assert_eq!(collapse_whitespace("a\u{00A0}\u{00A0}b"), "a\u{00A0}\u{00A0}b");
        assert_eq!(collapse_whitespace("\n\n  \n"), "");
    }
}
