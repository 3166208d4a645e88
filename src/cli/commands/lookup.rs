use anyhow::{Context, Result, bail};

use crate::{
    cli::{ExitStatus, args::LookupCommand},
    plural::{SelectorCache, extract_plural_expression},
    po,
};

/// Resolve a translation from a catalog and print it.
///
/// With `--count`, the catalog's plural rule picks the form; untranslated
/// forms fall back to msgid/msgid_plural the way gettext runtimes do.
pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let catalog = po::load(&cmd.catalog)
        .with_context(|| format!("Failed to load catalog: {}", cmd.catalog.display()))?;

    let context = cmd.context.unwrap_or_default();
    let Some(unit) = catalog.get(&context, &cmd.msgid) else {
        if context.is_empty() {
            bail!("No entry for \"{}\"", cmd.msgid);
        }
        bail!("No entry for \"{}\" in context \"{}\"", cmd.msgid, context);
    };

    let text = match cmd.count {
        None => match unit.msgstrs.first().filter(|s| !s.is_empty()) {
            Some(translated) => translated.clone(),
            None => unit.msgid.clone(),
        },
        Some(count) => {
            let expr = extract_plural_expression(&catalog.headers)
                .context("Cannot select a plural form")?;
            let selector = SelectorCache::global()
                .get_or_compile(&expr)
                .context("Cannot select a plural form")?;

            match selector.select(count, &unit.msgstrs).filter(|s| !s.is_empty()) {
                Some(translated) => translated.clone(),
                // Untranslated: fall back to the source strings by count.
                None if count == 1 => unit.msgid.clone(),
                None => unit.msgid_plural.clone().unwrap_or_else(|| unit.msgid.clone()),
            }
        }
    };

    println!("{text}");
    Ok(ExitStatus::Success)
}
