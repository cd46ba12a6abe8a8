//! Output formats.

use std::{fmt, str::FromStr};

use serde_json::Value;

use super::MergeError;

/// Serialization format of output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed JSON with two-space indentation.
    #[default]
    Json,
}

impl Format {
    pub const ALL: [Format; 1] = [Format::Json];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
        }
    }

    /// File extension of output files, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
        }
    }

    /// Serialize `value` for a human reviewer. Output ends with a newline.
    pub fn marshal(&self, value: &Value) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Format::Json => {
                let mut buf = serde_json::to_vec_pretty(value)?;
                buf.push(b'\n');
                Ok(buf)
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| MergeError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);

        let err = "xml".parse::<Format>().unwrap_err();
        assert!(matches!(err, MergeError::UnsupportedFormat(ref name) if name == "xml"));
        assert_eq!(err.to_string(), "unsupported format: xml");

        assert!("JSON".parse::<Format>().is_err());
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_marshal_json_is_indented() {
        let value = json!([{"id": "greeting", "translation": "Hello"}]);
        let buf = Format::Json.marshal(&value).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[\n  {\n    \"id\": \"greeting\",\n    \"translation\": \"Hello\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_marshal_empty_list() {
        let buf = Format::Json.marshal(&json!([])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
