//! PO text catalog reading and writing.
//!
//! The parser and writer are inverses for catalogs produced by the
//! builder: `load(serialize(c))` reproduces `c`'s translations and
//! headers. Catalogs are always UTF-8.

mod parser;
mod writer;

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;

pub use parser::parse_po;
pub use writer::serialize;

/// Errors from catalog I/O. Either kind aborts the whole load; no partial
/// catalog is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum PoError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed PO text at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Read and parse the catalog at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, PoError> {
    let content = fs::read_to_string(path)?;
    parse_po(&content)
}
