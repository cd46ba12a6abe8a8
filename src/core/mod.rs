//! Core merge engine.
//!
//! The engine runs as a straight pipeline:
//!
//! 1. **Load**: every input file is parsed into a [`Bundle`]
//!    (locale → translation id → [`Translation`]).
//! 2. **Reconcile**: every locale receives an entry for every key of the
//!    source locale ([`reconcile`]).
//! 3. **Partition**: each locale is projected into its "all" and
//!    "untranslated" lists ([`partition`]).
//! 4. **Write**: [`OutputWriter`] sorts and serializes each list.
//!
//! [`merge`] runs all four phases.

mod bundle;
mod error;
mod format;
mod locale;
mod merge;
pub mod parsers;
mod pipeline;
mod plural;
mod translation;
mod writer;

pub use bundle::{Bundle, LocaleTranslations, TranslationMap, locale_from_file_name};
pub use error::{LoadError, MergeError};
pub use format::Format;
pub use locale::{Locale, LocaleError};
pub use merge::{LocaleOutput, ReconcileStats, partition, reconcile};
pub use pipeline::{LocaleSummary, MergeOptions, MergeSummary, merge};
pub use plural::{InvalidPluralCategory, Language, PluralCategory};
pub use translation::{Message, PluralTranslation, Shape, SingleTranslation, Translation};
pub use writer::{Label, OutputWriter};
