//! i18n-merge - reconcile per-locale translation files
//!
//! i18n-merge takes translation files for several locales, makes every locale
//! provide every key of a source locale, and writes two files per locale: the
//! complete set (`<locale>.all.json`) and the entries still waiting for a
//! translator (`<locale>.untranslated.json`, pre-filled with source text).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, summary output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Merge engine (loading, reconciliation, partitioning, writing)

pub mod cli;
pub mod config;
pub mod core;
