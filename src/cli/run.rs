/// Dispatches parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any per-file failures
/// - `Err` if the command fails as a whole (e.g., unreadable input, bad config)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, convert::convert, extract::extract, init::init, rename::rename,
        render::render,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::Rename(cmd)) => rename(cmd),
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
