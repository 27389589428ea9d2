use serde::{Deserialize, Serialize};

use crate::util::sort_key;

/// Placeholder for `url_mod` / `url_download` when no catalog release matched.
pub const LOCAL_ONLY: &str = "Local mod only";

/// Placeholder for `Side` when no catalog release matched.
pub const UNKNOWN_SIDE: &str = "Unknown";

/// One manifest entry. Field names follow the published `modlist.json` layout.
///
/// `url_mod` and `url_download` are either both [`LOCAL_ONLY`] or both real
/// URLs: the only way to change them is [`ModRecord::with_catalog_match`],
/// which sets them together with `side`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "ModId")]
    pub mod_id: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Side")]
    pub side: String,
    url_mod: String,
    url_download: String,
}

impl ModRecord {
    /// Baseline record built from local metadata only.
    pub fn local(
        name: impl Into<String>,
        version: impl Into<String>,
        mod_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            mod_id: mod_id.into(),
            description: description.into(),
            side: UNKNOWN_SIDE.to_string(),
            url_mod: LOCAL_ONLY.to_string(),
            url_download: LOCAL_ONLY.to_string(),
        }
    }

    /// Overwrite the distribution fields after a catalog release matched.
    pub fn with_catalog_match(
        mut self,
        side: impl Into<String>,
        url_mod: impl Into<String>,
        url_download: impl Into<String>,
    ) -> Self {
        self.side = side.into();
        self.url_mod = url_mod.into();
        self.url_download = url_download.into();
        self
    }

    pub fn url_mod(&self) -> &str {
        &self.url_mod
    }

    pub fn url_download(&self) -> &str {
        &self.url_download
    }

    /// True when the record still carries the placeholder URLs.
    pub fn is_local_only(&self) -> bool {
        self.url_mod == LOCAL_ONLY && self.url_download == LOCAL_ONLY
    }
}

/// The serialized manifest: `{ "Mods": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "Mods")]
    pub mods: Vec<ModRecord>,
}

impl Manifest {
    /// Build a manifest, ordering records by mod id case-insensitively.
    ///
    /// The sort is stable, so records whose ids differ only in case keep
    /// the order they were given in. Empty ids sort first.
    pub fn from_records(mut mods: Vec<ModRecord>) -> Self {
        mods.sort_by_cached_key(|m| sort_key(&m.mod_id));
        Self { mods }
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
