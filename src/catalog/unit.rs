/// Comment block attached to a catalog entry.
///
/// Only the comment kinds that survive extraction and merging are modeled:
/// `reference` (`#:`) carries source provenance and is the one field the
/// builder merges across duplicate msgids; `extracted` (`#.`) and `flag`
/// (`#,`) pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    /// Source provenance, possibly multi-line (one location per line).
    pub reference: Option<String>,
    /// Extracted comments from the source (`#.`).
    pub extracted: Option<String>,
    /// Flags such as `fuzzy` (`#,`).
    pub flag: Option<String>,
}

impl Comments {
    pub fn is_empty(&self) -> bool {
        self.reference.is_none() && self.extracted.is_none() && self.flag.is_none()
    }
}

/// One catalog entry.
///
/// `(context, msgid)` is the unique identity of an entry within a catalog.
/// `msgstrs` holds one translated string per plural category; length 1 for
/// non-pluralizable units, `nplurals` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub context: String,
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub msgstrs: Vec<String>,
    pub comments: Comments,
}

impl TranslationUnit {
    /// Create a non-pluralizable unit with an empty translation.
    pub fn singular(msgid: impl Into<String>) -> Self {
        Self {
            context: String::new(),
            msgid: msgid.into(),
            msgid_plural: None,
            msgstrs: vec![String::new()],
            comments: Comments::default(),
        }
    }

    /// Create a pluralizable unit with `nplurals` empty translation slots.
    pub fn plural(
        msgid: impl Into<String>,
        msgid_plural: impl Into<String>,
        nplurals: usize,
    ) -> Self {
        Self {
            context: String::new(),
            msgid: msgid.into(),
            msgid_plural: Some(msgid_plural.into()),
            msgstrs: vec![String::new(); nplurals.max(1)],
            comments: Comments::default(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    /// True iff every plural form has a non-empty translation.
    ///
    /// A single empty `msgstr` makes the unit incomplete; a unit with no
    /// `msgstr` slots at all is vacuously complete.
    pub fn has_translations(&self) -> bool {
        self.msgstrs.iter().all(|s| !s.is_empty())
    }

    pub fn reference(&self) -> Option<&str> {
        self.comments.reference.as_deref()
    }
}
