//! Writes merged translation lists to disk.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use super::{Format, MergeError, Message, Translation};

/// Which projection of a locale an output file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    All,
    Untranslated,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::All => "all",
            Label::Untranslated => "untranslated",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes `<locale>.<label>.<ext>` files into one output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    outdir: PathBuf,
    format: Format,
}

impl OutputWriter {
    pub fn new(outdir: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            outdir: outdir.into(),
            format,
        }
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    /// Path of the file holding `label` translations of `locale_id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use i18n_merge::core::{Format, Label, OutputWriter};
    ///
    /// let writer = OutputWriter::new("out", Format::Json);
    /// assert_eq!(
    ///     writer.file_path("fr-fr", Label::Untranslated),
    ///     Path::new("out").join("fr-fr.untranslated.json")
    /// );
    /// ```
    pub fn file_path(&self, locale_id: &str, label: Label) -> PathBuf {
        self.outdir.join(format!(
            "{}.{}.{}",
            locale_id,
            label,
            self.format.extension()
        ))
    }

    /// Sort `translations` by id, serialize them and write the file.
    ///
    /// Returns the written path. A failed write may leave a partial file.
    pub fn write(
        &self,
        locale_id: &str,
        label: Label,
        mut translations: Vec<Translation>,
    ) -> Result<PathBuf, MergeError> {
        translations.sort_by(|a, b| a.id().cmp(b.id()));
        let value = Value::Array(
            translations
                .iter()
                .map(|translation| translation.marshal_interface())
                .collect(),
        );

        let buf = self
            .format
            .marshal(&value)
            .map_err(|source| MergeError::Marshal {
                locale: locale_id.to_string(),
                label: label.to_string(),
                source,
            })?;

        let path = self.file_path(locale_id, label);
        fs::write(&path, buf).map_err(|source| MergeError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(
            path = %path.display(),
            count = translations.len(),
            "wrote translations"
        );
        Ok(path)
    }
}
