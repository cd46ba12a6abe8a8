/// Dispatches to the command handler matching the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary
/// - `Err` if the command fails (invalid configuration, unreadable input, write error)
use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, merge::merge},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    match command {
        Some(Command::Merge(cmd)) => merge(cmd, &cwd),
        Some(Command::Init) => init(&cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
