use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use super::{PluralError, PluralSelector};

static GLOBAL: Lazy<SelectorCache> = Lazy::new(SelectorCache::new);

/// Memoizes compiled plural selectors by their exact source text.
///
/// The same rule recurs across every catalog of a language family, so
/// compiling once per process is enough. The map is append-only and keyed
/// by immutable strings; selectors compiled from the same text are
/// interchangeable, so a racing duplicate compile wastes work but never
/// correctness. Own an instance in tests; share [`SelectorCache::global`]
/// everywhere else.
#[derive(Debug, Default)]
pub struct SelectorCache {
    inner: Mutex<HashMap<String, Arc<PluralSelector>>>,
}

impl SelectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-lifetime shared cache.
    pub fn global() -> &'static SelectorCache {
        &GLOBAL
    }

    /// Return the cached selector for `expr`, compiling on first use.
    ///
    /// Keys are whitespace-sensitive: `"n!=1"` and `"n != 1"` compile
    /// separately even though they select identically.
    pub fn get_or_compile(&self, expr: &str) -> Result<Arc<PluralSelector>, PluralError> {
        if let Some(selector) = self.inner.lock().expect("selector cache lock").get(expr) {
            return Ok(Arc::clone(selector));
        }

        // Compile outside the lock; losing a race means inserting an
        // identical selector over the winner's.
        let selector = Arc::new(PluralSelector::compile(expr)?);
        self.inner
            .lock()
            .expect("selector cache lock")
            .insert(expr.to_string(), Arc::clone(&selector));
        Ok(selector)
    }

    /// Number of distinct expressions compiled so far.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("selector cache lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
