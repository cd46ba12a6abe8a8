//! Locale identifiers.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::plural::Language;

static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]{2,3})((?:-[a-z0-9]{2,8})*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("malformed locale identifier \"{0}\"")]
    Malformed(String),
    #[error("unknown language \"{language}\" in locale \"{locale}\"")]
    UnknownLanguage { locale: String, language: String },
}

/// A validated locale such as `en`, `en-us` or `zh-hant-tw`.
///
/// Identifiers are normalized to lowercase with `-` separators, so `en_US`,
/// `en-US` and `en-us` all name the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: String,
    language: Language,
    subtags: Vec<String>,
}

impl Locale {
    /// Parse and validate a locale identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use i18n_merge::core::Locale;
    ///
    /// let locale = Locale::parse("pt_BR").unwrap();
    /// assert_eq!(locale.id(), "pt-br");
    /// assert_eq!(locale.language().code(), "pt");
    /// assert_eq!(locale.region(), Some("br"));
    ///
    /// assert!(Locale::parse("json").is_err());
    /// ```
    pub fn parse(id: &str) -> Result<Locale, LocaleError> {
        let normalized = normalize_id(id);
        let captures = LOCALE_REGEX
            .captures(&normalized)
            .ok_or_else(|| LocaleError::Malformed(id.to_string()))?;

        let code = &captures[1];
        let language = Language::lookup(code).ok_or_else(|| LocaleError::UnknownLanguage {
            locale: id.to_string(),
            language: code.to_string(),
        })?;
        let subtags = captures[2]
            .split('-')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Locale {
            id: normalized,
            language,
            subtags,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Sub-tags after the language, e.g. `["hant", "tw"]` for `zh-hant-tw`.
    pub fn subtags(&self) -> &[String] {
        &self.subtags
    }

    /// The region sub-tag, if any: two letters or three digits.
    pub fn region(&self) -> Option<&str> {
        self.subtags
            .iter()
            .find(|tag| {
                (tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()))
                    || (tag.len() == 3 && tag.chars().all(|c| c.is_ascii_digit()))
            })
            .map(String::as_str)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().replace('_', "-").to_ascii_lowercase()
}
