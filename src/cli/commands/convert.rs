use std::env;

use anyhow::{Context, Result};

use super::super::{
    args::ConvertCommand,
    files::{read_keys, read_markup, write_template_and_keys},
};
use super::{CommandResult, CommandSummary, ConvertSummary};
use crate::{
    config::load_config,
    core::{UniqueStrategy, template},
};

pub fn convert(cmd: ConvertCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd)?.config;

    let strategy = cmd.strategy.unwrap_or(config.strategy);
    let mut options = config.options;
    if cmd.prefix_sequence {
        options.prefix_sequence = true;
    }
    if let Some(start) = cmd.prefix_sequence_start {
        options.prefix_sequence = true;
        options.prefix_sequence_start = start;
    }

    let markup = read_markup(&cmd.template)?;
    let keys = read_keys(&cmd.keys)?;

    let mut strategy = UniqueStrategy::new(strategy.build());
    let conversion = template::convert_strategy(keys, &markup, &mut strategy, &options)
        .with_context(|| format!("Failed to parse HTML: {}", cmd.template.display()))?;

    if cmd.apply {
        write_template_and_keys(
            &cmd.template,
            &conversion.template,
            &cmd.keys,
            &conversion.keys,
        )?;
    }

    Ok(CommandResult::new(CommandSummary::Convert(ConvertSummary {
        key_count: conversion.keys.len(),
        renames: conversion.renames,
        is_apply: cmd.apply,
    })))
}
