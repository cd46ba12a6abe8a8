//! Summary printing for CLI commands.
//!
//! Kept apart from the core so the merge engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    ExitStatus,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::core::MergeSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the summary of `result` to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print the summary of `result` to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if verbose && let Some(path) = &result.config_path {
        let _ = writeln!(writer, "{} {}", "config:".dimmed(), path.display());
    }
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

pub fn exit_status(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    let width = summary
        .locales
        .iter()
        .map(|locale| locale.locale_id.len())
        .max()
        .unwrap_or(0);

    for locale in &summary.locales {
        let counts = format!(
            "{} {}, {} untranslated",
            locale.total,
            plural(locale.total, "key", "keys"),
            locale.untranslated
        );
        let counts = if locale.untranslated == 0 {
            counts.green()
        } else {
            counts.yellow()
        };
        let mark = if locale.locale_id == summary.source_locale {
            format!("{} (source)", locale.locale_id)
        } else {
            locale.locale_id.clone()
        };
        let _ = writeln!(
            writer,
            "{} {:<width$}  {}",
            SUCCESS_MARK.green(),
            mark,
            counts,
            width = width + " (source)".len()
        );
        if verbose {
            for path in [&locale.all_path, &locale.untranslated_path] {
                let _ = writeln!(writer, "    {} {}", "-->".blue(), path.display());
            }
        }
    }

    let untranslated: usize = summary.locales.iter().map(|l| l.untranslated).sum();
    let locales = summary.locales.len();
    let _ = writeln!(
        writer,
        "\nMerged {} {} into {} {} ({} {} written, {} untranslated {})",
        summary.files_loaded,
        plural(summary.files_loaded, "file", "files"),
        locales,
        plural(locales, "locale", "locales"),
        locales * 2,
        plural(locales * 2, "file", "files"),
        untranslated,
        plural(untranslated, "entry", "entries"),
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let name = summary
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", name).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", name).red()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
