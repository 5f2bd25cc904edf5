//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow htmlkeys to be used as a library.
//! Summaries go to stdout, except for commands whose stdout carries markup.
//! Per-file failures always go to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ConvertSummary, ExtractSummary, FileFailure, InitSummary,
    RenameSummary, RenderSummary,
};
use crate::core::Rename;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stderr = io::stderr().lock();
    print_warnings_to(result, &mut stderr);
    print_failures_to(&result.failures, &mut stderr);
    print_summary_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_warnings_to<W: Write>(result: &CommandResult, writer: &mut W) {
    if let CommandSummary::Extract(summary) = &result.summary
        && summary.files.is_empty()
        && result.failures.is_empty()
    {
        let _ = writeln!(writer, "{} no HTML files found", "warning:".bold().yellow());
    }
}

pub fn print_failures_to<W: Write>(failures: &[FileFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(
            writer,
            "{} {}: {:#}",
            "error:".bold().red(),
            failure.path.display(),
            failure.error
        );
    }
}

pub fn print_summary_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract(summary, result.failures.len(), verbose, writer)
        }
        CommandSummary::Render(summary) => print_render(summary, writer),
        CommandSummary::Rename(summary) => print_rename(summary, writer),
        CommandSummary::Convert(summary) => print_convert(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_extract<W: Write>(
    summary: &ExtractSummary,
    failed: usize,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        for file in &summary.files {
            let _ = writeln!(
                writer,
                "  {} {} {} ({} {})",
                file.input.display(),
                "->".blue(),
                file.outputs.template.display(),
                file.key_count,
                if file.key_count == 1 { "key" } else { "keys" }
            );
        }
    }

    if !summary.files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} {} from {} {} ({} strategy)",
                summary.key_count(),
                if summary.key_count() == 1 { "key" } else { "keys" },
                summary.files.len(),
                if summary.files.len() == 1 { "file" } else { "files" },
                summary.strategy.as_str()
            )
            .green()
        );
    }

    if verbose && summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "  - skipped: {} unreadable {}",
            summary.skipped_count,
            if summary.skipped_count == 1 { "path" } else { "paths" }
        );
    }

    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be processed",
            FAILURE_MARK.red(),
            failed,
            if failed == 1 { "file" } else { "files" }
        );
    }
}

fn print_render<W: Write>(summary: &RenderSummary, writer: &mut W) {
    if let Some(output) = &summary.output {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Rendered {} into {}",
                summary.template.display(),
                output.display()
            )
            .green()
        );
    }
}

fn print_rename<W: Write>(summary: &RenameSummary, writer: &mut W) {
    if let Some(output) = &summary.output {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Renamed {} {} into {}",
                summary.renamed,
                if summary.renamed == 1 { "identifier" } else { "identifiers" },
                output.display()
            )
            .green()
        );
    }
}

fn print_convert<W: Write>(summary: &ConvertSummary, writer: &mut W) {
    let changed: Vec<&Rename> = summary
        .renames
        .iter()
        .filter(|rename| rename.old != rename.new)
        .collect();

    if changed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Identifiers already match the strategy".green()
        );
        return;
    }

    if !summary.is_apply {
        print_rename_table(&changed, writer);
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {} moved)",
            "Converted".green().bold(),
            changed.len(),
            if changed.len() == 1 { "identifier" } else { "identifiers" },
            summary.key_count,
            if summary.key_count == 1 { "key" } else { "keys" }
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {}.",
            "Would convert".yellow().bold(),
            changed.len(),
            if changed.len() == 1 { "identifier" } else { "identifiers" }
        );
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_rename_table<W: Write>(renames: &[&Rename], writer: &mut W) {
    let width = renames
        .iter()
        .map(|rename| UnicodeWidthStr::width(rename.old.as_str()))
        .max()
        .unwrap_or(0);

    for rename in renames {
        let padding = width - UnicodeWidthStr::width(rename.old.as_str());
        let _ = writeln!(
            writer,
            "  {}{:padding$} {} {}",
            rename.old,
            "",
            "->".blue(),
            rename.new,
            padding = padding
        );
    }
    let _ = writeln!(writer);
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
