//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all htmlkeys commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `extract`: Split HTML files into templates and key files
//! - `render`: Render a key file into a template
//! - `rename`: Rename unit identifiers in a template
//! - `convert`: Re-derive identifiers with another naming strategy
//! - `init`: Initialize htmlkeys configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::StrategyKind;

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Rename(cmd)) => cmd.common.verbose,
            Some(Command::Convert(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// HTML files or directories (default: config includes)
    pub paths: Vec<PathBuf>,

    /// Naming strategy for new units (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Do not extract image sources
    #[arg(long)]
    pub no_images: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Annotated template
    pub template: PathBuf,

    /// Key file with translated values
    pub keys: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Annotated template
    pub template: PathBuf,

    /// JSON object mapping old identifiers to new ones
    pub map: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Annotated template
    pub template: PathBuf,

    /// Key file belonging to the template
    pub keys: PathBuf,

    /// Target naming strategy (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Prefix new identifiers with a zero-padded sequence number
    #[arg(long)]
    pub prefix_sequence: bool,

    /// First sequence number (implies --prefix-sequence)
    #[arg(long)]
    pub prefix_sequence_start: Option<usize>,

    /// Actually rewrite the files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable content into <name>.template.html and <name>.keys.json
    Extract(ExtractCommand),
    /// Render translated values into an annotated template
    Render(RenderCommand),
    /// Rename unit identifiers in an annotated template
    Rename(RenameCommand),
    /// Re-derive unit identifiers with another naming strategy
    Convert(ConvertCommand),
    /// Initialize a new .htmlkeysrc.json configuration file
    Init,
}
