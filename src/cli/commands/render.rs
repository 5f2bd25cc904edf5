use anyhow::{Context, Result};

use super::super::{
    args::RenderCommand,
    files::{read_keys, read_markup, write_markup},
};
use super::{CommandResult, CommandSummary, RenderSummary};
use crate::core::template;

pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let markup = read_markup(&cmd.template)?;
    let keys = read_keys(&cmd.keys)?;

    let html = template::render(&markup, &keys)
        .with_context(|| format!("Failed to parse HTML: {}", cmd.template.display()))?;
    write_markup(cmd.output.as_deref(), &html)?;

    Ok(CommandResult::new(CommandSummary::Render(RenderSummary {
        template: cmd.template,
        output: cmd.output,
    })))
}
