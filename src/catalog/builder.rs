use indexmap::map::Entry;

use super::{Catalog, Headers, TranslationUnit};

/// Options for [`build_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Bucket units by their own `context` field instead of merging
    /// everything into the default context. Off by default, matching the
    /// historical single-bucket merge.
    pub split_contexts: bool,
}

/// Merge a stream of discovered units into a deduplicated catalog.
///
/// Units are processed in order. The first occurrence of an msgid in a
/// bucket is canonical: its `msgstrs`, `msgid_plural`, and comments other
/// than `reference` are retained verbatim. Later occurrences contribute
/// only their `reference` comment, appended newline-separated — and only
/// when both sides already have a non-empty reference. Identical
/// references are not deduplicated.
///
/// Total over well-formed input; a unit with an empty `msgid` is a caller
/// contract violation.
pub fn build_catalog(
    units: Vec<TranslationUnit>,
    headers: Headers,
    options: BuildOptions,
) -> Catalog {
    let mut catalog = Catalog::new(headers);

    for unit in units {
        let bucket_key = if options.split_contexts {
            unit.context.clone()
        } else {
            String::new()
        };
        let bucket = catalog.translations.entry(bucket_key).or_default();

        match bucket.entry(unit.msgid.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(unit);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                let merged = match (
                    existing.reference().filter(|r| !r.is_empty()),
                    unit.reference().filter(|r| !r.is_empty()),
                ) {
                    (Some(old), Some(new)) => Some(format!("{old}\n{new}")),
                    _ => None,
                };
                if merged.is_some() {
                    existing.comments.reference = merged;
                }
            }
        }
    }

    catalog
}
