//! Tolerant cleanup for hand-written `modinfo.json` descriptors.
//!
//! Mod authors write descriptors by hand, so they routinely contain `//`
//! comment lines and trailing commas that strict JSON rejects. This module
//! repairs the text before parsing and sanitizes the parsed value after.
//! Nothing here touches the filesystem.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Top-level fields dropped from every descriptor.
pub const DENYLISTED_FIELDS: &[&str] = &["website"];

/// A line whose first non-whitespace characters are `//`.
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*//[^\n]*$").expect("static pattern"));

/// A comma followed only by whitespace before a closing brace or bracket.
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("static pattern"));

/// Repair near-JSON text so a strict parser accepts it.
///
/// Comment lines are blanked (their line break is kept so parse errors
/// still point at the right line). Comments that start mid-line are left
/// alone, which keeps values like `"https://..."` intact.
pub fn repair_json(text: &str) -> String {
    let without_comments = COMMENT_LINE.replace_all(text, "");
    TRAILING_COMMA
        .replace_all(&without_comments, "$1")
        .into_owned()
}

/// Repair then parse descriptor text.
pub fn parse_repaired(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&repair_json(text))
}

/// Replace every `null` with an empty string, recursing through objects
/// and arrays. Other scalars pass through unchanged.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, sanitize_value(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Remove denylisted top-level fields, whatever their casing.
pub fn strip_denylisted(map: &mut Map<String, Value>) {
    map.retain(|key, _| {
        !DENYLISTED_FIELDS
            .iter()
            .any(|denied| key.eq_ignore_ascii_case(denied))
    });
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
