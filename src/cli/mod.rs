//! Command-line interface layer.
//!
//! Parses arguments, resolves configuration, runs the core merge engine and
//! prints a human-readable summary.

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, MergeArgs, MergeCommand};
pub use exit_status::ExitStatus;
pub use logging::init_tracing;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(report::exit_status(&result))
}
