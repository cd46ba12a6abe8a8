//! Reconciliation of a bundle against its source locale.
//!
//! Merging happens in two phases:
//!
//! 1. [`reconcile`] makes every locale carry an entry for every source key,
//!    inserting untranslated copies where an entry is missing or has a shape
//!    that does not match the source.
//! 2. [`partition`] projects each locale into its "all" list (normalized
//!    entries) and its "untranslated" list (incomplete entries backfilled from
//!    the source locale).
//!
//! Keys that only exist in non-source locales are passed through untouched.

use tracing::debug;

use super::{Bundle, Message, Translation, TranslationMap};

/// Counts of entries rewritten by [`reconcile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Placeholders inserted for keys a locale did not have.
    pub inserted: usize,
    /// Entries replaced because their shape differed from the source.
    pub replaced: usize,
}

/// Output lists of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOutput {
    pub locale_id: String,
    pub all: Vec<Translation>,
    pub untranslated: Vec<Translation>,
}

/// Fill every locale in `bundle` with entries for every key of `source_locale`.
///
/// Returns the snapshot of the source locale's translations taken before any
/// entry was inserted; it is the reference for [`partition`].
pub fn reconcile(bundle: &mut Bundle, source_locale: &str) -> (TranslationMap, ReconcileStats) {
    let source = bundle
        .translations(source_locale)
        .cloned()
        .unwrap_or_default();
    let mut stats = ReconcileStats::default();

    for entry in bundle.locales_mut() {
        let translations = &mut entry.translations;
        for (id, src) in &source {
            match translations.get(id) {
                Some(dst) if dst.shape() == src.shape() => continue,
                Some(dst) => {
                    debug!(
                        locale = entry.locale.id(),
                        id = id.as_str(),
                        expected = %src.shape(),
                        found = %dst.shape(),
                        "replacing translation with mismatched shape"
                    );
                    stats.replaced += 1;
                }
                None => stats.inserted += 1,
            }
            translations.insert(id.clone(), src.untranslated_copy());
        }
    }

    (source, stats)
}

/// Build the "all" and "untranslated" lists of every locale.
///
/// Outputs are ordered by locale id; the lists themselves are unordered and
/// sorted by the writer.
pub fn partition(bundle: &Bundle, source: &TranslationMap) -> Vec<LocaleOutput> {
    let mut outputs: Vec<LocaleOutput> = bundle
        .locales()
        .map(|entry| {
            let language = entry.locale.language();
            let mut all = Vec::with_capacity(entry.translations.len());
            let mut untranslated = Vec::new();

            for translation in entry.translations.values() {
                let normalized = translation.normalize(language);
                if normalized.incomplete(language) {
                    untranslated.push(normalized.backfill(source.get(translation.id())));
                }
                all.push(normalized);
            }

            LocaleOutput {
                locale_id: entry.locale.id().to_string(),
                all,
                untranslated,
            }
        })
        .collect();

    outputs.sort_by(|a, b| a.locale_id.cmp(&b.locale_id));
    outputs
}
