use anyhow::{Context, Result};

use crate::{
    cli::{ExitStatus, args::StatsCommand},
    po,
    report,
};

/// Report translated/untranslated counts for a catalog.
///
/// Exit code follows the linter convention: 1 when untranslated entries
/// remain, so CI can gate on complete catalogs.
pub fn stats(cmd: StatsCommand) -> Result<ExitStatus> {
    let catalog = po::load(&cmd.catalog)
        .with_context(|| format!("Failed to load catalog: {}", cmd.catalog.display()))?;

    let untranslated: Vec<_> = catalog.units().filter(|u| !u.has_translations()).collect();
    report::print_stats(catalog.len(), &untranslated, cmd.common.verbose);

    if untranslated.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
