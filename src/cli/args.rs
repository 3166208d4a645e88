//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan sources for translation calls and write a PO catalog
//! - `stats`: Report translated/untranslated counts for a catalog
//! - `lookup`: Resolve a translation (with plural selection) from a catalog
//! - `init`: Initialize an xpot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::catalog::LocationPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Directories or glob patterns to scan (default: config includes)
    pub paths: Vec<String>,

    /// Catalog file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How to record source locations in reference comments
    #[arg(long, value_enum)]
    pub location: Option<LocationPolicy>,

    /// Bucket entries by their context instead of merging into one bucket
    #[arg(long)]
    pub split_contexts: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Catalog file to inspect
    pub catalog: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file to read
    pub catalog: PathBuf,

    /// Source string to look up
    pub msgid: String,

    /// Count for plural selection
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Entry context
    #[arg(short, long)]
    pub context: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from source files into a PO catalog
    Extract(ExtractCommand),
    /// Show translated/untranslated statistics for a catalog
    Stats(StatsCommand),
    /// Look up a translation, selecting the plural form for a count
    Lookup(LookupCommand),
    /// Initialize a new .xpotrc.json configuration file
    Init,
}
