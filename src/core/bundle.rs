//! In-memory collection of every locale's translations for one merge run.

use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use tracing::debug;

use super::{
    LoadError, Locale, MergeError, Message, Translation, parsers::json::parse_translations,
};

/// Translations of a single locale, keyed by translation id.
pub type TranslationMap = HashMap<String, Translation>;

/// One locale's entry in the bundle.
#[derive(Debug, Clone)]
pub struct LocaleTranslations {
    pub locale: Locale,
    pub translations: TranslationMap,
}

/// Locale id → translation id → translation.
///
/// Later additions for the same locale and id overwrite earlier ones.
#[derive(Debug, Default)]
pub struct Bundle {
    locales: HashMap<String, LocaleTranslations>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path`, detect its locale from the file name, and add its translations.
    ///
    /// A locale whose file is empty is still registered, so it receives
    /// placeholders for every source key during reconciliation.
    pub fn load_translation_file(&mut self, path: &Path) -> Result<(), MergeError> {
        self.try_load(path).map_err(|source| MergeError::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    fn try_load(&mut self, path: &Path) -> Result<(), LoadError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();
        if extension != "json" {
            return Err(LoadError::UnsupportedExtension(extension));
        }

        let locale = locale_from_file_name(&file_name)?;
        let content = fs::read_to_string(path)?;
        let translations = parse_translations(&content)?;

        debug!(
            path = %path.display(),
            locale = locale.id(),
            count = translations.len(),
            "loaded translation file"
        );
        self.add_translations(locale, translations);
        Ok(())
    }

    /// Add translations for `locale`, overwriting entries with the same id.
    pub fn add_translations(
        &mut self,
        locale: Locale,
        translations: impl IntoIterator<Item = Translation>,
    ) {
        let entry = self
            .locales
            .entry(locale.id().to_string())
            .or_insert_with(|| LocaleTranslations {
                locale,
                translations: HashMap::new(),
            });
        for translation in translations {
            entry
                .translations
                .insert(translation.id().to_string(), translation);
        }
    }

    pub fn get(&self, locale_id: &str) -> Option<&LocaleTranslations> {
        self.locales.get(locale_id)
    }

    /// Translations of `locale_id`, if the locale has been loaded.
    pub fn translations(&self, locale_id: &str) -> Option<&TranslationMap> {
        self.get(locale_id).map(|entry| &entry.translations)
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleTranslations> {
        self.locales.values()
    }

    pub(crate) fn locales_mut(&mut self) -> impl Iterator<Item = &mut LocaleTranslations> {
        self.locales.values_mut()
    }

    /// Number of loaded locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Find the locale a file belongs to from its name.
///
/// The name is split on `.` and exactly one segment must be a valid locale,
/// e.g. `en-us.all.json` or `messages.fr.json`.
///
/// # Examples
///
/// ```
/// use i18n_merge::core::locale_from_file_name;
///
/// assert_eq!(locale_from_file_name("en-US.all.json").unwrap().id(), "en-us");
/// assert_eq!(locale_from_file_name("messages.fr.json").unwrap().id(), "fr");
/// assert!(locale_from_file_name("messages.json").is_err());
/// ```
pub fn locale_from_file_name(file_name: &str) -> Result<Locale, LoadError> {
    let mut found: Vec<Locale> = file_name
        .split('.')
        .filter_map(|segment| Locale::parse(segment).ok())
        .collect();

    match found.len() {
        0 => Err(LoadError::NoLocale(file_name.to_string())),
        1 => Ok(found.remove(0)),
        _ => Err(LoadError::MultipleLocales {
            file_name: file_name.to_string(),
            locales: found.iter().map(|locale| locale.id().to_string()).collect(),
        }),
    }
}
