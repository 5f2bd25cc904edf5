use anyhow::{Context, Result};

use super::super::{
    args::RenameCommand,
    files::{read_markup, read_rename_map, write_markup},
};
use super::{CommandResult, CommandSummary, RenameSummary};
use crate::core::{Document, rename_document_keys};

pub fn rename(cmd: RenameCommand) -> Result<CommandResult> {
    let markup = read_markup(&cmd.template)?;
    let renames = read_rename_map(&cmd.map)?;

    let mut document = Document::parse(&markup)
        .with_context(|| format!("Failed to parse HTML: {}", cmd.template.display()))?;
    let renamed = rename_document_keys(&mut document, &renames);
    write_markup(cmd.output.as_deref(), &document.to_html())?;

    Ok(CommandResult::new(CommandSummary::Rename(RenameSummary {
        renamed,
        output: cmd.output,
    })))
}
