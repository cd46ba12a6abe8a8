//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Reconcile translation files against a source locale and write
//!   `<locale>.all.<ext>` / `<locale>.untranslated.<ext>` for every locale
//! - `init`: Create a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Merge(cmd)) => cmd.args.common.verbose,
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

#[derive(Debug, Parser)]
pub struct MergeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translation files to merge; glob patterns are expanded (overrides config file)
    pub inputs: Vec<String>,

    /// Locale whose keys every other locale must provide (overrides config file)
    #[arg(long, env = "I18N_MERGE_SOURCE_LOCALE")]
    pub source_locale: Option<String>,

    /// Directory the merged files are written to (overrides config file)
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub args: MergeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill every locale with the source locale's keys and write all/untranslated files
    Merge(MergeCommand),
    /// Initialize a new .i18nmergerc.json configuration file
    Init,
}
