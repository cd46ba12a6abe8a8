use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nmergerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Translation files or glob patterns to merge when none are given on the command line.
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_outdir")]
    pub outdir: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_source_locale() -> String {
    "en-us".to_string()
}

fn default_outdir() -> String {
    ".".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            source_locale: default_source_locale(),
            outdir: default_outdir(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `inputs` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.inputs {
            if is_glob(pattern) {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'inputs': \"{}\"", pattern))?;
            }
        }
        Ok(())
    }
}

/// Only `*` and `?` make an input a glob, so paths containing brackets stay literal.
fn is_glob(input: &str) -> bool {
    input.contains('*') || input.contains('?')
}

/// Expand glob patterns among `inputs` into file paths.
///
/// Matches of each pattern are sorted. A pattern matching nothing is kept as a
/// literal path so that loading reports which input is missing.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if !is_glob(input) {
            paths.push(PathBuf::from(input));
            continue;
        }

        let mut matches = glob::glob(input)
            .with_context(|| format!("Invalid glob pattern: \"{}\"", input))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to expand glob pattern: \"{}\"", input))?;
        if matches.is_empty() {
            paths.push(PathBuf::from(input));
        } else {
            matches.sort();
            paths.extend(matches);
        }
    }
    Ok(paths)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
