//! Plural-rule compilation for `Plural-Forms` headers.
//!
//! A catalog header like `nplurals=2; plural=(n != 1);` declares how many
//! plural categories the language has and the rule selecting among them.
//! This module extracts both pieces from the header and compiles the rule
//! into a [`PluralSelector`] via a closed expression grammar (see
//! [`parser`]) — header text is never executed as code.

mod cache;
mod parser;

pub use cache::SelectorCache;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Headers;

/// Errors from header extraction and expression compilation.
///
/// Both surface immediately to the caller; a missing or malformed header is
/// never papered over with a default rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluralError {
    #[error("plural-forms header {0}")]
    Format(String),
    #[error("invalid plural expression `{expr}`: {message}")]
    Compile { expr: String, message: String },
}

// Mirrors the header shape `nplurals=<int>; plural=<expr>;`. The leading
// whitespace requirement keeps `plural` from matching inside `nplurals`.
static PLURAL_EXPR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\splural ?=? ?(.*)").expect("plural expression regex"));
static NPLURALS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"nplurals ?= ?(\d+)").expect("nplurals regex"));

fn plural_forms(headers: &Headers) -> Result<&str, PluralError> {
    headers
        .get("plural-forms")
        .map(String::as_str)
        .ok_or_else(|| PluralError::Format("is missing".to_string()))
}

/// Extract the plural-selection expression from the catalog headers.
///
/// One trailing `;` is stripped; the expression is otherwise returned as
/// written (the selector cache is keyed by this exact text).
pub fn extract_plural_expression(headers: &Headers) -> Result<String, PluralError> {
    let value = plural_forms(headers)?;
    let caps = PLURAL_EXPR_RE
        .captures(value)
        .ok_or_else(|| PluralError::Format(format!("has no plural rule: `{value}`")))?;
    let mut expr = caps[1].trim();
    if let Some(stripped) = expr.strip_suffix(';') {
        expr = stripped.trim_end();
    }
    if expr.is_empty() {
        return Err(PluralError::Format(format!(
            "has an empty plural rule: `{value}`"
        )));
    }
    Ok(expr.to_string())
}

/// Extract the number of plural categories from the catalog headers.
pub fn extract_plural_count(headers: &Headers) -> Result<usize, PluralError> {
    let value = plural_forms(headers)?;
    let caps = NPLURALS_RE
        .captures(value)
        .ok_or_else(|| PluralError::Format(format!("has no nplurals: `{value}`")))?;
    caps[1]
        .parse()
        .map_err(|_| PluralError::Format(format!("has an out-of-range nplurals: `{value}`")))
}

/// A compiled plural rule: `(count, forms) -> form`.
///
/// Pure function of its inputs; instances compiled from the same source
/// text are interchangeable, which is what makes the cache sound.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralSelector {
    source: String,
    expr: parser::Expr,
}

impl PluralSelector {
    /// Compile a plural expression.
    ///
    /// Syntax errors surface here, never at selection time.
    pub fn compile(source: &str) -> Result<Self, PluralError> {
        let expr = parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            expr,
        })
    }

    /// The expression text this selector was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The plural-form index for a count. Boolean results map to 0/1;
    /// negative results clamp to 0.
    pub fn index(&self, count: u64) -> usize {
        let n = i64::try_from(count).unwrap_or(i64::MAX);
        self.expr.eval(n).max(0) as usize
    }

    /// Pick the plural form for `count`, or `None` when the rule selects
    /// an index beyond the supplied forms.
    pub fn select<'a, S>(&self, count: u64, forms: &'a [S]) -> Option<&'a S> {
        forms.get(self.index(count))
    }
}
