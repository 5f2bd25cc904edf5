use std::{
    collections::{HashMap, hash_map::Entry},
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use rayon::{iter::Either, prelude::*};

use super::super::{
    args::ExtractCommand,
    file_scanner::scan_files,
    files::{OutputPaths, read_markup, write_template_and_keys},
};
use super::{CommandResult, CommandSummary, ExtractSummary, ExtractedFile, FileFailure};
use crate::{
    config::{Config, load_config},
    core::{Document, ExtractOptions, StrategyKind, UniqueStrategy, extract_document},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let config = loaded.config;

    let strategy = cmd.strategy.unwrap_or(config.strategy);
    let mut options = config.options.clone();
    if cmd.no_images {
        options.parse.images = false;
    }

    let (inputs, skipped_count): (Vec<PathBuf>, usize) = if cmd.paths.is_empty() {
        let scanned = scan_files(&loaded.root, &config.includes, &config.ignores, verbose);
        (scanned.files.into_iter().collect(), scanned.skipped_count)
    } else {
        collect_inputs(&cmd.paths, &config, verbose)?
    };
    let (inputs, mut failures) = reject_shared_outputs(inputs);
    tracing::debug!(files = inputs.len(), strategy = strategy.as_str(), "extracting");

    let (files, extract_failures): (Vec<_>, Vec<_>) = inputs
        .par_iter()
        .map(|input| {
            extract_file(input, strategy, &options).map_err(|error| FileFailure {
                path: input.clone(),
                error,
            })
        })
        .partition_map(|result| match result {
            Ok(file) => Either::Left(file),
            Err(failure) => Either::Right(failure),
        });
    failures.extend(extract_failures);

    Ok(CommandResult::new(CommandSummary::Extract(ExtractSummary {
        strategy,
        files,
        skipped_count,
    }))
    .with_failures(failures))
}

/// Expand explicit paths: files are taken as given, directories are scanned.
///
/// Returns the sorted inputs and the number of paths the scanner skipped.
fn collect_inputs(
    paths: &[PathBuf],
    config: &Config,
    verbose: bool,
) -> Result<(Vec<PathBuf>, usize)> {
    let mut inputs = Vec::new();
    let mut skipped_count = 0;
    for path in paths {
        if path.is_dir() {
            let scanned = scan_files(path, &[], &config.ignores, verbose);
            inputs.extend(scanned.files);
            skipped_count += scanned.skipped_count;
        } else if path.is_file() {
            inputs.push(path.clone());
        } else {
            bail!("Path does not exist: {}", path.display());
        }
    }
    inputs.sort();
    inputs.dedup();
    Ok((inputs, skipped_count))
}

/// Keep the first input (in sorted order) for each pair of output files.
///
/// `page.html`, `page.htm` and `page.template.html` all write
/// `page.template.html` and `page.keys.json`; the later ones fail instead
/// of overwriting each other's outputs.
fn reject_shared_outputs(inputs: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<FileFailure>) {
    let mut owners: HashMap<OutputPaths, PathBuf> = HashMap::new();
    let mut kept = Vec::with_capacity(inputs.len());
    let mut failures = Vec::new();

    for input in inputs {
        match owners.entry(OutputPaths::for_input(&input)) {
            Entry::Occupied(owner) => failures.push(FileFailure {
                error: anyhow!(
                    "Outputs {} and {} are already written for {}",
                    owner.key().template.display(),
                    owner.key().keys.display(),
                    owner.get().display()
                ),
                path: input,
            }),
            Entry::Vacant(slot) => {
                slot.insert(input.clone());
                kept.push(input);
            }
        }
    }

    (kept, failures)
}

fn extract_file(
    input: &Path,
    strategy: StrategyKind,
    options: &ExtractOptions,
) -> Result<ExtractedFile> {
    let markup = read_markup(input)?;
    let mut document = Document::parse(&markup)
        .with_context(|| format!("Failed to parse HTML: {}", input.display()))?;

    let mut strategy = UniqueStrategy::seeded_from(strategy.build(), &document);
    let keys = extract_document(&mut document, &mut strategy, options);

    let outputs = OutputPaths::for_input(input);
    write_template_and_keys(
        &outputs.template,
        document.to_html().trim(),
        &outputs.keys,
        &keys,
    )?;
    tracing::debug!(input = %input.display(), keys = keys.len(), "extracted file");

    Ok(ExtractedFile {
        input: input.to_path_buf(),
        outputs,
        key_count: keys.len(),
    })
}
