//! End-to-end merge run: validate, load, reconcile, partition, write.
//!
//! The run either writes every output file or stops at the first error.
//! Loading and reconciliation are sequential; once every locale's output
//! lists exist, files are written in parallel since each targets its own path.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    Bundle, Format, Label, Locale, LocaleOutput, MergeError, OutputWriter, ReconcileStats,
    partition, reconcile,
};

/// Inputs of a merge run.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub inputs: Vec<PathBuf>,
    pub source_locale: String,
    pub outdir: PathBuf,
    pub format: String,
}

/// Per-locale result of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub locale_id: String,
    pub total: usize,
    pub untranslated: usize,
    pub all_path: PathBuf,
    pub untranslated_path: PathBuf,
}

/// Result of a successful merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub source_locale: String,
    pub files_loaded: usize,
    pub stats: ReconcileStats,
    /// Ordered by locale id.
    pub locales: Vec<LocaleSummary>,
}

/// Validated configuration of a merge run.
#[derive(Debug, Clone)]
struct MergePlan<'a> {
    inputs: &'a [PathBuf],
    source_locale: Locale,
    writer: OutputWriter,
}

impl<'a> MergePlan<'a> {
    /// Check everything that can be checked before touching any input file.
    fn new(options: &'a MergeOptions) -> Result<Self, MergeError> {
        if options.inputs.is_empty() {
            return Err(MergeError::NoInputFiles);
        }
        let source_locale =
            Locale::parse(&options.source_locale).map_err(|source| {
                MergeError::InvalidSourceLocale {
                    locale: options.source_locale.clone(),
                    source,
                }
            })?;
        let format: Format = options.format.parse()?;

        Ok(Self {
            inputs: &options.inputs,
            source_locale,
            writer: OutputWriter::new(&options.outdir, format),
        })
    }
}

/// Merge `options.inputs` against the source locale and write the results.
pub fn merge(options: &MergeOptions) -> Result<MergeSummary, MergeError> {
    let plan = MergePlan::new(options)?;

    let mut bundle = Bundle::new();
    for path in plan.inputs {
        bundle.load_translation_file(path)?;
    }
    info!(
        files = plan.inputs.len(),
        locales = bundle.len(),
        "loaded translation files"
    );

    let source_id = plan.source_locale.id();
    let (source, stats) = reconcile(&mut bundle, source_id);
    info!(
        source = source_id,
        keys = source.len(),
        inserted = stats.inserted,
        replaced = stats.replaced,
        "reconciled locales"
    );

    let outputs = partition(&bundle, &source);
    let locales = write_outputs(&plan.writer, outputs)?;

    Ok(MergeSummary {
        source_locale: source_id.to_string(),
        files_loaded: plan.inputs.len(),
        stats,
        locales,
    })
}

fn write_outputs(
    writer: &OutputWriter,
    outputs: Vec<LocaleOutput>,
) -> Result<Vec<LocaleSummary>, MergeError> {
    create_outdir(writer.outdir())?;

    // Every locale is written before errors are inspected, so the reported
    // failure is the first one in locale order rather than the first to finish.
    let results: Vec<Result<LocaleSummary, MergeError>> = outputs
        .into_par_iter()
        .map(|output| write_locale(writer, output))
        .collect();

    results.into_iter().collect()
}

fn write_locale(writer: &OutputWriter, output: LocaleOutput) -> Result<LocaleSummary, MergeError> {
    let LocaleOutput {
        locale_id,
        all,
        untranslated,
    } = output;
    let total = all.len();
    let untranslated_count = untranslated.len();

    let all_path = writer.write(&locale_id, Label::All, all)?;
    let untranslated_path = writer.write(&locale_id, Label::Untranslated, untranslated)?;
    debug!(
        locale = locale_id.as_str(),
        total,
        untranslated = untranslated_count,
        "wrote locale"
    );

    Ok(LocaleSummary {
        locale_id,
        total,
        untranslated: untranslated_count,
        all_path,
        untranslated_path,
    })
}

fn create_outdir(outdir: &Path) -> Result<(), MergeError> {
    if outdir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(outdir).map_err(|source| MergeError::Write {
        path: outdir.to_path_buf(),
        source,
    })
}
