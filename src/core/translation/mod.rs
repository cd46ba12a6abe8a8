//! Translation entries.
//!
//! A translation is one localized message identified by a key that is stable
//! across locales. Messages come in two mutually incompatible shapes:
//!
//! - `Single`: one piece of text
//! - `Plural`: one text per plural category (`one`, `few`, `other`, ...)
//!
//! The merge engine only talks to translations through the [`Message`] trait,
//! which is dispatched over the closed [`Translation`] enum via `enum_dispatch`.

use enum_dispatch::enum_dispatch;
use serde_json::Value;

use super::plural::{Language, PluralCategory};

mod plural;
mod single;

pub use plural::PluralTranslation;
pub use single::SingleTranslation;

/// Shape of a translation. Entries with different shapes for the same key
/// cannot be merged into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Single,
    Plural,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Single => write!(f, "single"),
            Shape::Plural => write!(f, "plural"),
        }
    }
}

/// Operations every translation shape provides.
///
/// All transforming operations are pure: they return a new [`Translation`]
/// and leave `self` untouched.
#[enum_dispatch]
pub trait Message {
    /// Key identifying the message across locales.
    fn id(&self) -> &str;

    fn shape(&self) -> Shape;

    /// Canonical copy with every form `language` requires present (possibly empty).
    fn normalize(&self, language: &Language) -> Translation;

    /// True if any form `language` requires is missing or empty.
    fn incomplete(&self, language: &Language) -> bool;

    /// Fill missing content from `source`, keeping whatever is already translated.
    ///
    /// `None` means there is no source counterpart; the result is then an
    /// unchanged copy.
    fn backfill(&self, source: Option<&Translation>) -> Translation;

    /// Same shape and key, with no translated content.
    fn untranslated_copy(&self) -> Translation;

    /// Format-neutral representation written to output files.
    fn marshal_interface(&self) -> Value;

    /// Non-empty text to use for `category`, if this translation has one.
    fn template(&self, category: PluralCategory) -> Option<&str>;
}

/// A translation in one of the supported shapes.
#[enum_dispatch(Message)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(SingleTranslation),
    Plural(PluralTranslation),
}

impl Translation {
    pub fn single(id: impl Into<String>, text: impl Into<String>) -> Self {
        Translation::Single(SingleTranslation::new(id, Some(text.into())))
    }

    pub fn plural<I, S>(id: impl Into<String>, forms: I) -> Self
    where
        I: IntoIterator<Item = (PluralCategory, S)>,
        S: Into<String>,
    {
        Translation::Plural(PluralTranslation::new(
            id,
            forms.into_iter().map(|(category, text)| (category, text.into())),
        ))
    }
}

/// Text is considered translated once it is non-empty.
pub(crate) fn is_translated(text: Option<&String>) -> bool {
    text.is_some_and(|text| !text.is_empty())
}
