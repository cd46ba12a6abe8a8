use serde_json::{Value, json};

use super::{Message, Shape, Translation, is_translated};
use crate::core::plural::{Language, PluralCategory};

/// A message with a single text, regardless of plural rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTranslation {
    id: String,
    /// `None` until the message is translated.
    text: Option<String>,
}

impl SingleTranslation {
    pub fn new(id: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id: id.into(),
            text,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Message for SingleTranslation {
    fn id(&self) -> &str {
        &self.id
    }

    fn shape(&self) -> Shape {
        Shape::Single
    }

    fn normalize(&self, _language: &Language) -> Translation {
        self.clone().into()
    }

    fn incomplete(&self, _language: &Language) -> bool {
        !is_translated(self.text.as_ref())
    }

    fn backfill(&self, source: Option<&Translation>) -> Translation {
        let mut filled = self.clone();
        if !is_translated(filled.text.as_ref())
            && let Some(text) = source.and_then(|src| src.template(PluralCategory::Other))
        {
            filled.text = Some(text.to_string());
        }
        filled.into()
    }

    fn untranslated_copy(&self) -> Translation {
        SingleTranslation::new(self.id.clone(), None).into()
    }

    fn marshal_interface(&self) -> Value {
        json!({
            "id": self.id,
            "translation": self.text.as_deref().unwrap_or_default(),
        })
    }

    fn template(&self, _category: PluralCategory) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}
