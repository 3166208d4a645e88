use std::fmt::Write as _;

use crate::catalog::{Catalog, TranslationUnit};

/// Render a catalog as PO text: the header entry first, then every unit in
/// insertion order. Inverse of [`super::parse_po`] for built catalogs.
pub fn serialize(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    for (name, value) in &catalog.headers {
        let _ = writeln!(out, "\"{}: {}\\n\"", canonical_header_name(name), escape(value));
    }

    for bucket in catalog.translations.values() {
        for unit in bucket.values() {
            out.push('\n');
            write_unit(&mut out, unit);
        }
    }

    out
}

fn write_unit(out: &mut String, unit: &TranslationUnit) {
    for line in comment_lines(unit.comments.extracted.as_deref()) {
        let _ = writeln!(out, "#. {line}");
    }
    for line in comment_lines(unit.comments.reference.as_deref()) {
        let _ = writeln!(out, "#: {line}");
    }
    for line in comment_lines(unit.comments.flag.as_deref()) {
        let _ = writeln!(out, "#, {line}");
    }

    if !unit.context.is_empty() {
        let _ = writeln!(out, "msgctxt \"{}\"", escape(&unit.context));
    }
    let _ = writeln!(out, "msgid \"{}\"", escape(&unit.msgid));

    match &unit.msgid_plural {
        Some(plural) => {
            let _ = writeln!(out, "msgid_plural \"{}\"", escape(plural));
            for (index, msgstr) in unit.msgstrs.iter().enumerate() {
                let _ = writeln!(out, "msgstr[{index}] \"{}\"", escape(msgstr));
            }
        }
        None => {
            let msgstr = unit.msgstrs.first().map_or("", String::as_str);
            let _ = writeln!(out, "msgstr \"{}\"", escape(msgstr));
        }
    }
}

fn comment_lines(comment: Option<&str>) -> impl Iterator<Item = &str> {
    comment.into_iter().flat_map(str::lines)
}

/// `plural-forms` -> `Plural-Forms`. Headers are stored lowercase; the
/// canonical casing is cosmetic and lowercased again on parse.
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Encode `\\ \" \n \t \r`; inverse of the parser's unescape.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            other => result.push(other),
        }
    }
    result
}
