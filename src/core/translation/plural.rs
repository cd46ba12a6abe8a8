use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use super::{Message, Shape, Translation, is_translated};
use crate::core::plural::{Language, PluralCategory};

/// A message with one text per plural category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralTranslation {
    id: String,
    forms: BTreeMap<PluralCategory, String>,
}

impl PluralTranslation {
    pub fn new(
        id: impl Into<String>,
        forms: impl IntoIterator<Item = (PluralCategory, String)>,
    ) -> Self {
        Self {
            id: id.into(),
            forms: forms.into_iter().collect(),
        }
    }

    pub fn forms(&self) -> &BTreeMap<PluralCategory, String> {
        &self.forms
    }
}

impl Message for PluralTranslation {
    fn id(&self) -> &str {
        &self.id
    }

    fn shape(&self) -> Shape {
        Shape::Plural
    }

    fn normalize(&self, language: &Language) -> Translation {
        let required = language.plural_categories();
        let mut normalized = self.clone();
        normalized
            .forms
            .retain(|category, _| required.contains(category));
        for category in required {
            normalized.forms.entry(*category).or_default();
        }
        normalized.into()
    }

    fn incomplete(&self, language: &Language) -> bool {
        language
            .plural_categories()
            .iter()
            .any(|category| !is_translated(self.forms.get(category)))
    }

    fn backfill(&self, source: Option<&Translation>) -> Translation {
        let mut filled = self.clone();
        if let Some(source) = source {
            for (category, text) in filled.forms.iter_mut() {
                if !text.is_empty() {
                    continue;
                }
                if let Some(template) = source
                    .template(*category)
                    .or_else(|| source.template(PluralCategory::Other))
                {
                    *text = template.to_string();
                }
            }
        }
        filled.into()
    }

    fn untranslated_copy(&self) -> Translation {
        PluralTranslation {
            id: self.id.clone(),
            forms: BTreeMap::new(),
        }
        .into()
    }

    fn marshal_interface(&self) -> Value {
        let forms: Map<String, Value> = self
            .forms
            .iter()
            .map(|(category, text)| (category.to_string(), Value::String(text.clone())))
            .collect();
        json!({
            "id": self.id,
            "translation": forms,
        })
    }

    fn template(&self, category: PluralCategory) -> Option<&str> {
        self.forms
            .get(&category)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}
