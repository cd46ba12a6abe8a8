//! Plural categories and the languages that require them.
//!
//! A language's plural rules decide which plural forms a complete translation
//! must provide. Only the set of required categories matters for merging, so
//! the rule table maps language codes straight to category lists.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// CLDR plural category.
///
/// Variants are declared in CLDR order, which is also the order forms are
/// written in output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid plural category \"{0}\"")]
pub struct InvalidPluralCategory(pub String);

impl FromStr for PluralCategory {
    type Err = InvalidPluralCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidPluralCategory(s.to_string()))
    }
}

use PluralCategory::{Few, Many, One, Other, Two, Zero};

const OTHER: &[PluralCategory] = &[Other];
const ONE_OTHER: &[PluralCategory] = &[One, Other];
const ZERO_ONE_OTHER: &[PluralCategory] = &[Zero, One, Other];
const ONE_TWO_OTHER: &[PluralCategory] = &[One, Two, Other];
const ONE_FEW_OTHER: &[PluralCategory] = &[One, Few, Other];
const ONE_TWO_FEW_OTHER: &[PluralCategory] = &[One, Two, Few, Other];
const ONE_FEW_MANY_OTHER: &[PluralCategory] = &[One, Few, Many, Other];
const ONE_TWO_FEW_MANY_OTHER: &[PluralCategory] = &[One, Two, Few, Many, Other];
const ALL_CATEGORIES: &[PluralCategory] = &[Zero, One, Two, Few, Many, Other];

/// Language code → required plural categories.
const PLURAL_RULES: &[(&str, &[PluralCategory])] = &[
    ("af", ONE_OTHER),
    ("am", ONE_OTHER),
    ("ar", ALL_CATEGORIES),
    ("az", ONE_OTHER),
    ("be", ONE_FEW_MANY_OTHER),
    ("bg", ONE_OTHER),
    ("bn", ONE_OTHER),
    ("bs", ONE_FEW_OTHER),
    ("ca", ONE_OTHER),
    ("cs", ONE_FEW_MANY_OTHER),
    ("cy", ALL_CATEGORIES),
    ("da", ONE_OTHER),
    ("de", ONE_OTHER),
    ("el", ONE_OTHER),
    ("en", ONE_OTHER),
    ("es", ONE_OTHER),
    ("et", ONE_OTHER),
    ("eu", ONE_OTHER),
    ("fa", ONE_OTHER),
    ("fi", ONE_OTHER),
    ("fil", ONE_OTHER),
    ("fr", ONE_OTHER),
    ("ga", ONE_TWO_FEW_MANY_OTHER),
    ("gl", ONE_OTHER),
    ("gu", ONE_OTHER),
    ("he", ONE_TWO_OTHER),
    ("hi", ONE_OTHER),
    ("hr", ONE_FEW_OTHER),
    ("hu", ONE_OTHER),
    ("hy", ONE_OTHER),
    ("id", OTHER),
    ("is", ONE_OTHER),
    ("it", ONE_OTHER),
    ("ja", OTHER),
    ("ka", ONE_OTHER),
    ("kk", ONE_OTHER),
    ("km", OTHER),
    ("kn", ONE_OTHER),
    ("ko", OTHER),
    ("lo", OTHER),
    ("lt", ONE_FEW_MANY_OTHER),
    ("lv", ZERO_ONE_OTHER),
    ("mk", ONE_OTHER),
    ("ml", ONE_OTHER),
    ("mn", ONE_OTHER),
    ("mr", ONE_OTHER),
    ("ms", OTHER),
    ("my", OTHER),
    ("nb", ONE_OTHER),
    ("ne", ONE_OTHER),
    ("nl", ONE_OTHER),
    ("nn", ONE_OTHER),
    ("no", ONE_OTHER),
    ("pa", ONE_OTHER),
    ("pl", ONE_FEW_MANY_OTHER),
    ("pt", ONE_OTHER),
    ("ro", ONE_FEW_OTHER),
    ("ru", ONE_FEW_MANY_OTHER),
    ("si", ONE_OTHER),
    ("sk", ONE_FEW_MANY_OTHER),
    ("sl", ONE_TWO_FEW_OTHER),
    ("sq", ONE_OTHER),
    ("sr", ONE_FEW_OTHER),
    ("sv", ONE_OTHER),
    ("sw", ONE_OTHER),
    ("ta", ONE_OTHER),
    ("te", ONE_OTHER),
    ("th", OTHER),
    ("tr", ONE_OTHER),
    ("uk", ONE_FEW_MANY_OTHER),
    ("ur", ONE_OTHER),
    ("uz", ONE_OTHER),
    ("vi", OTHER),
    ("zh", OTHER),
    ("zu", ONE_OTHER),
];

/// A language together with the plural forms its translations must provide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    categories: &'static [PluralCategory],
}

impl Language {
    /// Look up a language by its lowercase ISO 639 code.
    ///
    /// # Examples
    ///
    /// ```
    /// use i18n_merge::core::{Language, PluralCategory};
    ///
    /// let ja = Language::lookup("ja").unwrap();
    /// assert_eq!(ja.plural_categories(), &[PluralCategory::Other]);
    /// assert!(Language::lookup("json").is_none());
    /// ```
    pub fn lookup(code: &str) -> Option<Language> {
        PLURAL_RULES
            .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
            .ok()
            .map(|index| {
                let (code, categories) = PLURAL_RULES[index];
                Language { code, categories }
            })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Plural categories a complete translation in this language must provide.
    pub fn plural_categories(&self) -> &'static [PluralCategory] {
        self.categories
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
