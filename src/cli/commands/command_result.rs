use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use super::super::files::OutputPaths;
use crate::core::{Rename, StrategyKind};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Render(RenderSummary),
    Rename(RenameSummary),
    Convert(ConvertSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractedFile {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub strategy: StrategyKind,
    pub files: Vec<ExtractedFile>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

impl ExtractSummary {
    pub fn key_count(&self) -> usize {
        self.files.iter().map(|file| file.key_count).sum()
    }
}

#[derive(Debug)]
pub struct RenderSummary {
    pub template: PathBuf,
    /// None when the markup went to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RenameSummary {
    pub renamed: usize,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConvertSummary {
    pub renames: Vec<Rename>,
    pub key_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// A file the command could not process.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Result of running htmlkeys commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-file failures. The command itself still completed.
    pub failures: Vec<FileFailure>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            failures: Vec::new(),
        }
    }

    pub fn with_failures(mut self, failures: Vec<FileFailure>) -> Self {
        self.failures = failures;
        self
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_failures(self.failures.len())
    }
}
