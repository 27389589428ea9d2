use modlist_core::{CatalogEntry, CatalogRelease, Side};
use serde::{Deserialize, Deserializer};

/// The `mod` object from `GET /api/mod/{modid}`.
///
/// `assetid`, `side` and `releases` are required; a body missing any of
/// them is a shape error, not a not-found. `side` may be `null`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiMod {
    pub assetid: u64,
    #[serde(deserialize_with = "nullable")]
    pub side: Option<String>,
    pub releases: Vec<ApiRelease>,
}

// Required key, nullable value.
fn nullable<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(d)
}

/// One entry of `mod.releases`. Other fields (tags, downloads, ...) are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiRelease {
    #[serde(default)]
    pub modversion: Option<String>,
    #[serde(default)]
    pub mainfile: Option<String>,
}

impl From<ApiRelease> for CatalogRelease {
    fn from(r: ApiRelease) -> Self {
        Self {
            version: r.modversion.unwrap_or_default(),
            main_file: r.mainfile.filter(|f| !f.is_empty()),
        }
    }
}

impl From<ApiMod> for CatalogEntry {
    fn from(m: ApiMod) -> Self {
        let raw = m.side.unwrap_or_default();
        let side = Side::from_catalog(&raw);
        if !raw.eq_ignore_ascii_case(side.as_str()) {
            log::debug!("asset {}: catalog side {:?} recorded as {}", m.assetid, raw, side);
        }
        Self {
            asset_id: m.assetid,
            side,
            releases: m.releases.into_iter().map(Into::into).collect(),
        }
    }
}
