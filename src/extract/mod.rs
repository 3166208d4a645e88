//! Source scanning: file discovery, parsing, and translation-call
//! extraction.
//!
//! The scanner walks the project tree, parses each candidate file with swc,
//! and runs the [`MessageVisitor`] over the AST. Files that fail to read or
//! parse become warnings, never a fatal error — one broken file should not
//! sink a whole extraction run.

pub mod scanner;
pub mod source;
mod template;
mod visitor;

use std::fs;

use rayon::prelude::*;

pub use scanner::{ScanResult, scan_files};
pub use visitor::{MessageVisitor, RawMessage};

/// Messages discovered in one file.
#[derive(Debug)]
pub struct FileMessages {
    pub file_path: String,
    pub messages: Vec<RawMessage>,
}

/// A file that could not be read or parsed.
#[derive(Debug)]
pub struct ExtractionWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub files: Vec<FileMessages>,
    pub warnings: Vec<ExtractionWarning>,
}

impl ExtractionResult {
    /// Total messages across all files.
    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.messages.len()).sum()
    }
}

/// Parse `files` in parallel and extract their translation calls.
///
/// Results keep the order of `files`, so a sorted input yields a
/// deterministic catalog.
pub fn extract_from_files(files: &[String]) -> ExtractionResult {
    let outcomes: Vec<Result<FileMessages, ExtractionWarning>> = files
        .par_iter()
        .map(|file_path| {
            let code = fs::read_to_string(file_path).map_err(|e| ExtractionWarning {
                file_path: file_path.clone(),
                error: e.to_string(),
            })?;
            let parsed =
                source::parse_source(code, file_path).map_err(|e| ExtractionWarning {
                    file_path: file_path.clone(),
                    error: e.to_string(),
                })?;
            Ok(FileMessages {
                file_path: file_path.clone(),
                messages: MessageVisitor::extract(&parsed.module, &parsed.source_map),
            })
        })
        .collect();

    let mut result = ExtractionResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(file_messages) => result.files.push(file_messages),
            Err(warning) => result.warnings.push(warning),
        }
    }
    result
}
