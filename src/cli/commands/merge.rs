use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::{MergeArgs, MergeCommand},
    config::{Config, ConfigLoadResult, expand_inputs, load_config},
    core::{self, MergeOptions},
};

pub fn merge(cmd: MergeCommand, cwd: &Path) -> Result<CommandResult> {
    let ConfigLoadResult { config, path } = load_config(cwd)?;
    if let Some(path) = &path {
        debug!(path = %path.display(), "using config file");
    }

    let options = resolve_options(cmd.args, config)?;
    let summary = core::merge(&options)?;

    Ok(CommandResult {
        summary: CommandSummary::Merge(summary),
        config_path: path,
    })
}

/// Command-line values win over the config file, which wins over defaults.
fn resolve_options(args: MergeArgs, config: Config) -> Result<MergeOptions> {
    let patterns = if args.inputs.is_empty() {
        config.inputs
    } else {
        args.inputs
    };

    Ok(MergeOptions {
        inputs: expand_inputs(&patterns)?,
        source_locale: args.source_locale.unwrap_or(config.source_locale),
        outdir: args
            .outdir
            .unwrap_or_else(|| PathBuf::from(config.outdir)),
        format: args.format.unwrap_or(config.format),
    })
}
