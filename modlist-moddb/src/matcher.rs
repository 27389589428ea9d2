use modlist_core::CatalogRelease;

/// First release whose version tag equals `version` exactly.
///
/// Comparison is byte-for-byte: no trimming, case folding or semver
/// normalization. Catalog order is authoritative when tags repeat.
pub fn find_release<'a>(version: &str, releases: &'a [CatalogRelease]) -> Option<&'a CatalogRelease> {
    releases.iter().find(|r| r.version == version)
}

/// Artifact reference of the matching release, if it has one.
pub fn main_file_for_version<'a>(version: &str, releases: &'a [CatalogRelease]) -> Option<&'a str> {
    find_release(version, releases)?.main_file.as_deref()
}
