//! In-memory PO catalog model.
//!
//! A [`Catalog`] is built fresh per extraction pass (or loaded from disk),
//! mutated only by the builder during merge, and discarded once serialized.
//! Contexts and msgids keep insertion order so serialization is stable.

pub mod builder;
pub mod reference;
pub mod unit;

pub use builder::{BuildOptions, build_catalog};
pub use reference::{LocationPolicy, annotate_reference};
pub use unit::{Comments, TranslationUnit};

use indexmap::IndexMap;

/// Catalogs are always written as UTF-8.
pub const CHARSET: &str = "UTF-8";

/// Catalog headers, keyed by lowercase header name, insertion-ordered.
pub type Headers = IndexMap<String, String>;

/// Default headers for a freshly initialized catalog.
///
/// The plural rule is the Germanic two-form default; languages with other
/// rules get theirs when an existing catalog is loaded.
pub fn default_headers(language: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert("language".to_string(), language.to_string());
    headers.insert(
        "content-type".to_string(),
        format!("text/plain; charset={CHARSET}"),
    );
    headers.insert(
        "plural-forms".to_string(),
        "nplurals=2; plural=(n != 1);".to_string(),
    );
    headers
}

/// A set of translation units grouped by context, plus catalog headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub headers: Headers,
    /// context -> msgid -> unit, both levels in insertion order.
    pub translations: IndexMap<String, IndexMap<String, TranslationUnit>>,
}

impl Catalog {
    /// Create an empty catalog with the given headers and the default
    /// context bucket already in place.
    pub fn new(headers: Headers) -> Self {
        let mut translations = IndexMap::new();
        translations.insert(String::new(), IndexMap::new());
        Self {
            headers,
            translations,
        }
    }

    /// Look up a unit by `(context, msgid)`.
    pub fn get(&self, context: &str, msgid: &str) -> Option<&TranslationUnit> {
        self.translations.get(context)?.get(msgid)
    }

    /// Units in the default (empty-string) context, in insertion order.
    pub fn default_units(&self) -> impl Iterator<Item = &TranslationUnit> {
        self.translations.get("").into_iter().flat_map(|m| m.values())
    }

    /// All units across all contexts, in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &TranslationUnit> {
        self.translations.values().flat_map(|m| m.values())
    }

    /// Total number of units across all contexts.
    pub fn len(&self) -> usize {
        self.translations.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
