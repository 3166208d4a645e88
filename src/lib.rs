//! xpot - gettext catalog extraction for JavaScript projects
//!
//! xpot is a CLI tool and library for maintaining gettext PO catalogs from
//! JavaScript/TypeScript sources. It scans code for translation calls
//! (`` t`...` ``, `gettext()`, `ngettext()`), merges the discovered strings
//! into a deduplicated catalog with source references, and compiles
//! `Plural-Forms` rules for plural-aware lookups.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, merge builder, reference annotation
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Source scanning and translation-call discovery
//! - `plural`: Plural-rule extraction, compilation, and caching
//! - `po`: PO text parsing and serialization
//! - `report`: Terminal output formatting
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod plural;
pub mod po;
pub mod report;
pub mod utils;
