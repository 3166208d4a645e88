//! Report formatting and printing utilities.
//!
//! Terminal output for the CLI commands lives here, separate from the
//! engine so xpot can be used as a library. All printers take a writer
//! variant for testing.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::TranslationUnit;
use crate::extract::ExtractionWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Untranslated msgids wider than this are truncated in `stats -v` output.
const MAX_MSGID_DISPLAY_WIDTH: usize = 48;

/// Print the extraction summary to stdout.
pub fn print_extract_summary(source_files: usize, entries: usize, output: &str) {
    print_extract_summary_to(source_files, entries, output, &mut io::stdout().lock());
}

pub fn print_extract_summary_to<W: Write>(
    source_files: usize,
    entries: usize,
    output: &str,
    writer: &mut W,
) {
    let msg = format!(
        "Extracted {} {} from {} source {} -> {}",
        entries,
        if entries == 1 { "entry" } else { "entries" },
        source_files,
        if source_files == 1 { "file" } else { "files" },
        output
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print warnings about files that could not be read or parsed.
///
/// Without `--verbose` only a count is shown; with it, one line per file.
pub fn print_parse_warnings(warnings: &[ExtractionWarning], verbose: bool) {
    print_parse_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warnings_to<W: Write>(
    warnings: &[ExtractionWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print the `stats` summary to stdout.
pub fn print_stats(total: usize, untranslated: &[&TranslationUnit], verbose: bool) {
    print_stats_to(total, untranslated, verbose, &mut io::stdout().lock());
}

pub fn print_stats_to<W: Write>(
    total: usize,
    untranslated: &[&TranslationUnit],
    verbose: bool,
    writer: &mut W,
) {
    if untranslated.is_empty() {
        let msg = format!(
            "{} {} translated",
            total,
            if total == 1 { "entry" } else { "entries" }
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
        return;
    }

    if verbose {
        for unit in untranslated {
            let _ = writeln!(
                writer,
                "  {} {}",
                FAILURE_MARK.yellow(),
                display_msgid(&unit.msgid)
            );
        }
    }
    let msg = format!(
        "{} of {} {} untranslated",
        untranslated.len(),
        total,
        if total == 1 { "entry" } else { "entries" }
    );
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red());
}

/// Truncate wide msgids so the stats listing stays one line per entry.
fn display_msgid(msgid: &str) -> String {
    let flat = msgid.replace('\n', "\\n");
    if flat.width() <= MAX_MSGID_DISPLAY_WIDTH {
        return flat;
    }

    let mut out = String::new();
    let mut width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > MAX_MSGID_DISPLAY_WIDTH - 1 {
            break;
        }
        width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}
