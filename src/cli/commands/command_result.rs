use std::path::PathBuf;

use crate::core::MergeSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False if a config file already existed and was left alone.
    pub created: bool,
}

/// Result of running an i18n-merge command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Config file the command's settings were read from, if any.
    pub config_path: Option<PathBuf>,
}
