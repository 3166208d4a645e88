use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::TranslationUnit;

/// How source locations are recorded in `#:` reference comments.
///
/// Comes from config or the `--location` flag. Any unrecognized config
/// value falls back to `Line`, so parsing a policy never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationPolicy {
    /// `path:line` (the default).
    #[default]
    Line,
    /// File path only, no line number.
    File,
    /// No reference comment at all.
    Never,
}

impl LocationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationPolicy::Line => "line",
            LocationPolicy::File => "file",
            LocationPolicy::Never => "never",
        }
    }
}

impl FromStr for LocationPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "file" => LocationPolicy::File,
            "never" => LocationPolicy::Never,
            _ => LocationPolicy::Line,
        })
    }
}

impl From<String> for LocationPolicy {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl From<LocationPolicy> for String {
    fn from(policy: LocationPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for LocationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record the provenance of `unit` in its `reference` comment.
///
/// Must run before the unit reaches the builder if provenance is wanted;
/// the builder only merges references, it never computes locations.
/// `line` is 1-based.
pub fn annotate_reference(
    unit: &mut TranslationUnit,
    line: usize,
    file_path: &str,
    policy: LocationPolicy,
) {
    unit.comments.reference = match policy {
        LocationPolicy::File => Some(file_path.to_string()),
        LocationPolicy::Never => None,
        LocationPolicy::Line => Some(format!("{file_path}:{line}")),
    };
}
