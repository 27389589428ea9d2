//! Catalog data as the pipeline consumes it, independent of the wire format.

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// One published version of a mod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRelease {
    /// Version tag the release was published under (e.g. "1.4.2")
    pub version: String,
    /// Raw artifact reference on the catalog's own asset host.
    /// Absent when the catalog lists the release without a file.
    pub main_file: Option<String>,
}

impl CatalogRelease {
    pub fn new(version: impl Into<String>, main_file: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            main_file: Some(main_file.into()),
        }
    }
}

/// Everything the catalog knows about one mod identifier.
///
/// Releases are kept in the catalog's order; the version matcher relies on
/// that order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub asset_id: u64,
    pub side: Side,
    pub releases: Vec<CatalogRelease>,
}
