//! Reader for single-file code mods (`.cs`).
//!
//! These have no descriptor; identity is scraped from the `[assembly:
//! ModInfo(...)]` attribute and the namespace declaration. Each field is
//! searched independently, so attribute argument order does not matter.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ReadError;

static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Version\s*=\s*"([^"]+)""#).expect("static pattern"));
static SIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Side\s*=\s*"([^"]+)""#).expect("static pattern"));
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Description\s*=\s*"([^"]+)""#).expect("static pattern"));
static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"namespace\s+([A-Za-z0-9_]+)").expect("static pattern"));

/// Fields scraped from a source file. Missing fields are `None`, never `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFields {
    pub version: Option<String>,
    pub side: Option<String>,
    pub description: Option<String>,
    pub namespace: Option<String>,
}

impl SourceFields {
    /// Scrape all fields from file content.
    pub fn parse(content: &str) -> Self {
        Self {
            version: capture(&VERSION, content),
            side: capture(&SIDE, content),
            description: capture(&DESCRIPTION, content),
            namespace: capture(&NAMESPACE, content),
        }
    }

    /// Catalog identifier derived from the namespace: lower-cased, spaces removed.
    pub fn mod_id(&self) -> Option<String> {
        let id: String = self
            .namespace
            .as_deref()?
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        if id.is_empty() { None } else { Some(id) }
    }
}

fn capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Read a source file and scrape its fields.
pub fn read_source_fields(path: &Path) -> Result<SourceFields, ReadError> {
    let content = std::fs::read_to_string(path)?;
    Ok(SourceFields::parse(&content))
}
