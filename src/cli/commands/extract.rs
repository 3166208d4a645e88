use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    catalog::{BuildOptions, TranslationUnit, annotate_reference, build_catalog, default_headers},
    cli::{ExitStatus, args::ExtractCommand},
    config::load_config,
    extract::{extract_from_files, scan_files},
    plural::extract_plural_count,
    po,
    report,
    utils::is_meaningful,
};

/// Scan sources, build the catalog, and write it to the output path.
pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd)?.config;

    let source_root = cmd
        .common
        .source_root
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or(config.source_root);
    let includes = if cmd.paths.is_empty() {
        config.includes
    } else {
        cmd.paths
    };

    let scan = scan_files(
        &source_root,
        &includes,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );
    // Deterministic catalog order regardless of walk order.
    let mut files: Vec<String> = scan.files.into_iter().collect();
    files.sort();

    let extraction = extract_from_files(&files);
    report::print_parse_warnings(&extraction.warnings, verbose);

    let headers = default_headers(&config.language);
    let nplurals = extract_plural_count(&headers).unwrap_or(2);
    let location = cmd.location.unwrap_or(config.location);

    let mut units = Vec::new();
    for file in &extraction.files {
        let reference_path = display_path(&file.file_path);
        for message in &file.messages {
            if !is_meaningful(&message.msgid) {
                continue;
            }
            let mut unit = match &message.msgid_plural {
                Some(plural) => TranslationUnit::plural(&message.msgid, plural, nplurals),
                None => TranslationUnit::singular(&message.msgid),
            }
            .with_context(message.context.as_str());
            annotate_reference(&mut unit, message.line, &reference_path, location);
            units.push(unit);
        }
    }
    let entry_count = units.len();

    let catalog = build_catalog(
        units,
        headers,
        BuildOptions {
            split_contexts: cmd.split_contexts,
        },
    );

    let output = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(&output, po::serialize(&catalog))
        .with_context(|| format!("Failed to write catalog: {}", output.display()))?;

    report::print_extract_summary(
        extraction.files.len(),
        entry_count,
        &output.to_string_lossy(),
    );
    Ok(ExitStatus::Success)
}

/// Reference comments read better without a leading `./`.
fn display_path(path: &str) -> String {
    path.strip_prefix("./").unwrap_or(path).to_string()
}
