//! JSON translation file parser.
//!
//! Two layouts are accepted:
//!
//! ```json
//! [
//!   { "id": "greeting", "translation": "Hello" },
//!   { "id": "items", "translation": { "one": "1 item", "other": "{{.Count}} items" } }
//! ]
//! ```
//!
//! and the flat map form:
//!
//! ```json
//! {
//!   "greeting": "Hello",
//!   "items": { "one": "1 item", "other": "{{.Count}} items" }
//! }
//! ```
//!
//! A `null` or missing `translation` yields an untranslated single message.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::core::{
    LoadError, PluralCategory, PluralTranslation, SingleTranslation, Translation,
};

pub fn parse_translations(content: &str) -> Result<Vec<Translation>, LoadError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(content)?;
    match root {
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| parse_entry(index, entry))
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(id, value)| parse_value(id, value))
            .collect(),
        _ => Err(LoadError::InvalidRoot),
    }
}

fn parse_entry(index: usize, entry: Value) -> Result<Translation, LoadError> {
    let Value::Object(mut object) = entry else {
        return Err(LoadError::InvalidEntry { index });
    };
    let id = match object.remove("id") {
        Some(Value::String(id)) => id,
        _ => return Err(LoadError::MissingId { index }),
    };
    let value = object.remove("translation").unwrap_or(Value::Null);
    parse_value(id, value)
}

fn parse_value(id: String, value: Value) -> Result<Translation, LoadError> {
    match value {
        Value::String(text) => Ok(SingleTranslation::new(id, Some(text)).into()),
        Value::Null => Ok(SingleTranslation::new(id, None).into()),
        Value::Object(forms) => parse_plural(id, forms),
        other => Err(LoadError::InvalidTranslation {
            id,
            kind: value_kind(&other),
        }),
    }
}

fn parse_plural(id: String, forms: Map<String, Value>) -> Result<Translation, LoadError> {
    let mut parsed = BTreeMap::new();
    for (category, form) in forms {
        let plural_category = category
            .parse::<PluralCategory>()
            .map_err(|source| LoadError::InvalidPluralCategory {
                id: id.clone(),
                source,
            })?;
        let Value::String(text) = form else {
            return Err(LoadError::InvalidPluralForm { id, category });
        };
        parsed.insert(plural_category, text);
    }
    Ok(PluralTranslation::new(id, parsed).into())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
