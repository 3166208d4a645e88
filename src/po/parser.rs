use indexmap::IndexMap;

use super::PoError;
use crate::catalog::{Catalog, Comments, Headers, TranslationUnit};

/// Which multi-line field a bare `"..."` continuation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr(usize),
}

#[derive(Debug, Default)]
struct PendingEntry {
    reference: Vec<String>,
    extracted: Vec<String>,
    flag: Vec<String>,
    msgctxt: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    msgstrs: Vec<String>,
}

impl PendingEntry {
    fn is_blank(&self) -> bool {
        self.msgid.is_none()
            && self.msgctxt.is_none()
            && self.reference.is_empty()
            && self.extracted.is_empty()
            && self.flag.is_empty()
    }

    fn into_unit(self, line: usize) -> Result<TranslationUnit, PoError> {
        let msgid = self.msgid.ok_or_else(|| PoError::Parse {
            line,
            message: "entry has no msgid".to_string(),
        })?;
        let join = |lines: Vec<String>| {
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        };
        let msgstrs = if self.msgstrs.is_empty() {
            vec![String::new()]
        } else {
            self.msgstrs
        };
        Ok(TranslationUnit {
            context: self.msgctxt.unwrap_or_default(),
            msgid,
            msgid_plural: self.msgid_plural,
            msgstrs,
            comments: Comments {
                reference: join(self.reference),
                extracted: join(self.extracted),
                flag: join(self.flag),
            },
        })
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> PoError {
    PoError::Parse {
        line,
        message: message.into(),
    }
}

/// Extract the quoted value from the remainder of a keyword line.
fn quoted_value(rest: &str, line: usize) -> Result<String, PoError> {
    let rest = rest.trim();
    if rest.len() < 2 || !rest.starts_with('"') || !rest.ends_with('"') {
        return Err(parse_error(line, format!("expected quoted string, got `{rest}`")));
    }
    Ok(unescape(&rest[1..rest.len() - 1]))
}

/// Decode `\n \t \r \" \\` in a single pass.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

/// Parse `msgstr[n]` lines; returns the index and quoted value.
fn indexed_msgstr(line_text: &str, line: usize) -> Result<Option<(usize, String)>, PoError> {
    let Some(rest) = line_text.strip_prefix("msgstr[") else {
        return Ok(None);
    };
    let Some(close) = rest.find(']') else {
        return Err(parse_error(line, "unclosed msgstr index"));
    };
    let index: usize = rest[..close]
        .parse()
        .map_err(|_| parse_error(line, format!("invalid msgstr index `{}`", &rest[..close])))?;
    let value = quoted_value(&rest[close + 1..], line)?;
    Ok(Some((index, value)))
}

/// Split the header entry's msgstr into `name -> value` pairs,
/// lowercasing names.
fn parse_headers(msgstr: &str) -> Headers {
    let mut headers = Headers::new();
    for line in msgstr.lines() {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_lowercase();
            if !name.is_empty() {
                headers.insert(name, value.trim().to_string());
            }
        }
    }
    headers
}

/// Parse PO text into a catalog.
///
/// The header entry (empty msgid) populates `catalog.headers`; translator
/// comments (`# ...`) are skipped, `#.`/`#:`/`#,` are kept. Any malformed
/// line aborts the parse.
pub fn parse_po(content: &str) -> Result<Catalog, PoError> {
    let mut headers: Option<Headers> = None;
    let mut units: Vec<TranslationUnit> = Vec::new();

    let mut entry = PendingEntry::default();
    let mut field: Option<Field> = None;

    let mut flush = |entry: &mut PendingEntry, line: usize| -> Result<(), PoError> {
        if entry.is_blank() {
            *entry = PendingEntry::default();
            return Ok(());
        }
        let pending = std::mem::take(entry);
        if pending.msgid.as_deref() == Some("") {
            // Header entry; only the first one counts.
            if headers.is_none() {
                headers = Some(parse_headers(pending.msgstrs.first().map_or("", String::as_str)));
            }
            return Ok(());
        }
        units.push(pending.into_unit(line)?);
        Ok(())
    };

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            flush(&mut entry, line_no)?;
            field = None;
            continue;
        }

        if let Some(rest) = line.strip_prefix("#:") {
            entry.reference.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("#.") {
            entry.extracted.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("#,") {
            entry.flag.push(rest.trim().to_string());
        } else if line.starts_with('#') {
            // Translator comment; not modeled.
        } else if let Some(rest) = line.strip_prefix("msgctxt") {
            if entry.msgid.is_some() {
                flush(&mut entry, line_no)?;
            }
            entry.msgctxt = Some(quoted_value(rest, line_no)?);
            field = Some(Field::Msgctxt);
        } else if let Some(rest) = line.strip_prefix("msgid_plural") {
            entry.msgid_plural = Some(quoted_value(rest, line_no)?);
            field = Some(Field::MsgidPlural);
        } else if let Some((plural_index, value)) = indexed_msgstr(line, line_no)? {
            while entry.msgstrs.len() <= plural_index {
                entry.msgstrs.push(String::new());
            }
            entry.msgstrs[plural_index] = value;
            field = Some(Field::Msgstr(plural_index));
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            entry.msgstrs = vec![quoted_value(rest, line_no)?];
            field = Some(Field::Msgstr(0));
        } else if let Some(rest) = line.strip_prefix("msgid") {
            if entry.msgid.is_some() {
                flush(&mut entry, line_no)?;
            }
            entry.msgid = Some(quoted_value(rest, line_no)?);
            field = Some(Field::Msgid);
        } else if line.starts_with('"') {
            let value = quoted_value(line, line_no)?;
            let target = match field {
                Some(Field::Msgctxt) => entry.msgctxt.as_mut(),
                Some(Field::Msgid) => entry.msgid.as_mut(),
                Some(Field::MsgidPlural) => entry.msgid_plural.as_mut(),
                Some(Field::Msgstr(i)) => entry.msgstrs.get_mut(i),
                None => {
                    return Err(parse_error(line_no, "continuation outside an entry"));
                }
            };
            match target {
                Some(s) => s.push_str(&value),
                None => return Err(parse_error(line_no, "continuation has no field")),
            }
        } else {
            return Err(parse_error(line_no, format!("unrecognized line `{line}`")));
        }
    }

    let last_line = content.lines().count();
    flush(&mut entry, last_line)?;

    let mut catalog = Catalog::new(headers.unwrap_or_default());
    for unit in units {
        let bucket = catalog
            .translations
            .entry(unit.context.clone())
            .or_insert_with(IndexMap::new);
        bucket.insert(unit.msgid.clone(), unit);
    }
    Ok(catalog)
}
