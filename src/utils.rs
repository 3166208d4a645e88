//! Common utility functions shared across the codebase.

use once_cell::sync::Lazy;
use regex::Regex;

// Interpolation placeholders, digits, whitespace, and common punctuation —
// everything that carries no translatable content.
static NON_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{.*?\}|\d|\s|[.,/#!$%^&*;:{}=\-_`~()]").expect("non-text regex")
});

/// Checks if the text is worth cataloging at all.
///
/// Strips `${...}` placeholders, digits, whitespace, and punctuation;
/// returns true iff anything meaningful remains. Used to skip extracted
/// strings that are purely numeric, punctuation, or a bare placeholder.
///
/// # Examples
///
/// ```
/// use xpot::utils::is_meaningful;
///
/// assert!(is_meaningful("hello ${x}"));
/// assert!(is_meaningful("你好"));
/// assert!(!is_meaningful("123 ${x} !!!"));
/// assert!(!is_meaningful("${placeholder}"));
/// assert!(!is_meaningful(""));
/// ```
pub fn is_meaningful(text: &str) -> bool {
    let stripped = NON_TEXT_RE.replace_all(text, "");
    stripped.chars().any(|c| !c.is_whitespace())
}
