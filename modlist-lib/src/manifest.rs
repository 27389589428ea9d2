//! Writing `modlist.json`.

use std::io;
use std::path::{Path, PathBuf};

use modlist_core::Manifest;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ManifestError;

/// Default output file name, written to the working directory.
pub const DEFAULT_MANIFEST_NAME: &str = "modlist.json";

/// Serialize a manifest with 4-space indentation. Non-ASCII text is written as-is.
pub fn to_json_string(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the manifest atomically (temp file, then rename).
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let json = to_json_string(manifest)?;
    let io_err = |source: io::Error| classify_io_error(path, source);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = tmp_path(path);
    std::fs::write(&tmp, json).map_err(io_err)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn classify_io_error(path: &Path, source: io::Error) -> ManifestError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        ManifestError::PermissionDenied(path.to_path_buf())
    } else {
        ManifestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
