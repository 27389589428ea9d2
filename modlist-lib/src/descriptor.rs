//! The parsed `modinfo.json` record.

use serde_json::{Map, Value};

use crate::error::ReadError;
use crate::normalize;

/// Result of looking up a descriptor field.
///
/// Keeps "never written" apart from "written empty". Nulls have already
/// been sanitized to empty strings by the time a field is looked up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// The key is not in the descriptor at all
    Absent,
    /// The key is present with an empty string
    Empty,
    /// The key has a usable value
    Value(&'a Value),
}

/// A descriptor with case-insensitive top-level keys.
///
/// Built by [`Descriptor::parse`], which applies the full normalization:
/// text repair, null sanitizing, key lower-casing and denylist removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    fields: Map<String, Value>,
}

impl Descriptor {
    /// Repair, parse, and normalize descriptor text.
    pub fn parse(text: &str) -> Result<Self, ReadError> {
        let value = normalize::parse_repaired(text)
            .map_err(|e| ReadError::malformed(format!("invalid JSON: {e}")))?;
        Self::from_value(normalize::sanitize_value(value))
    }

    fn from_value(value: Value) -> Result<Self, ReadError> {
        let Value::Object(map) = value else {
            return Err(ReadError::malformed(format!(
                "expected a JSON object, found {}",
                json_type_name(&value)
            )));
        };
        let mut fields: Map<String, Value> = map
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        normalize::strip_denylisted(&mut fields);
        Ok(Self { fields })
    }

    /// Look up a field by name, ignoring case.
    pub fn field(&self, key: &str) -> Field<'_> {
        match self.fields.get(&key.to_lowercase()) {
            None => Field::Absent,
            Some(Value::String(s)) if s.is_empty() => Field::Empty,
            Some(v) => Field::Value(v),
        }
    }

    /// A field as display text.
    ///
    /// Strings and numbers are usable; empty strings, nulls, booleans,
    /// arrays and objects are treated as missing.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.field(key) {
            Field::Value(Value::String(s)) => Some(s.clone()),
            Field::Value(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_case_insensitive() {
        let d = Descriptor::parse(r#"{"ModID": "foo", "Name": "Foo", "VERSION": "1.0.0"}"#).unwrap();
        assert_eq!(d.text("modid").as_deref(), Some("foo"));
        assert_eq!(d.text("MODID").as_deref(), Some("foo"));
        assert_eq!(d.text("name").as_deref(), Some("Foo"));
        assert_eq!(d.text("version").as_deref(), Some("1.0.0"));
    }

    #[test]
    fn website_is_stripped() {
        let d = Descriptor::parse(r#"{"modid": "foo", "Website": "https://example.com"}"#).unwrap();
        assert_eq!(d.field("website"), Field::Absent);
        assert_eq!(d.text("modid").as_deref(), Some("foo"));
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let d = Descriptor::parse(r#"{"a": null, "b": "", "c": "x"}"#).unwrap();
        assert_eq!(d.field("a"), Field::Empty);
        assert_eq!(d.field("b"), Field::Empty);
        assert!(matches!(d.field("c"), Field::Value(_)));
        assert_eq!(d.field("d"), Field::Absent);
        assert_eq!(d.text("a"), None);
    }

    #[test]
    fn parse_sanitizes_nulls() {
        let d = Descriptor::parse(r#"{"description": null, "authors": [null, "me"]}"#).unwrap();
        assert_eq!(d.field("description"), Field::Empty);
        assert_eq!(d.field("authors"), Field::Value(&json!(["", "me"])));
    }

    #[test]
    fn numeric_version_is_usable_text() {
        let d = Descriptor::parse(r#"{"version": 2}"#).unwrap();
        assert_eq!(d.text("version").as_deref(), Some("2"));
    }

    #[test]
    fn non_object_is_malformed() {
        let err = Descriptor::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ReadError::MalformedDescriptor(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = Descriptor::parse(r#"{"modid": "foo" "name": "Foo"}"#).unwrap_err();
        assert!(matches!(err, ReadError::MalformedDescriptor(_)));
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let d = Descriptor::parse(r#"{"modid": "foo", "Dependencies": {"game": "1.20.0"}}"#).unwrap();
        assert_eq!(d.field("dependencies"), Field::Value(&json!({"game": "1.20.0"})));
    }
}
