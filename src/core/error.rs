//! Errors raised while merging translation files.
//!
//! Every variant is fatal to a merge run. Variants carry the path, locale or
//! format needed to diagnose the failure without re-running; the underlying
//! cause is exposed through `source()` rather than repeated in the message.

use std::{io, path::PathBuf};

use thiserror::Error;

use super::locale::LocaleError;
use super::plural::InvalidPluralCategory;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("need at least one translation file to parse")]
    NoInputFiles,

    #[error("invalid source locale \"{locale}\"")]
    InvalidSourceLocale {
        locale: String,
        #[source]
        source: LocaleError,
    },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to load translation file {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("failed to marshal {label} translations for {locale}")]
    Marshal {
        locale: String,
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single translation file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension \"{0}\", expected .json")]
    UnsupportedExtension(String),

    #[error("no locale found in file name \"{0}\"")]
    NoLocale(String),

    #[error(
        "multiple locales found in file name \"{file_name}\": {}; expected one",
        locales.join(", ")
    )]
    MultipleLocales {
        file_name: String,
        locales: Vec<String>,
    },

    #[error("root must be an array or an object of translations")]
    InvalidRoot,

    #[error("translation #{index} must be an object")]
    InvalidEntry { index: usize },

    #[error("translation #{index} is missing a string \"id\"")]
    MissingId { index: usize },

    #[error("translation \"{id}\" has unsupported value type {kind}")]
    InvalidTranslation { id: String, kind: &'static str },

    #[error("invalid plural form in translation \"{id}\"")]
    InvalidPluralCategory {
        id: String,
        #[source]
        source: InvalidPluralCategory,
    },

    #[error("translation \"{id}\" has a non-string \"{category}\" form")]
    InvalidPluralForm { id: String, category: String },
}
