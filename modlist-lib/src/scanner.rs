//! Directory scanner for mod folders.
//!
//! Only top-level files are considered; the game itself never loads mods
//! from subdirectories of the mods folder.

use std::path::{Path, PathBuf};

use modlist_core::util::display_file_name;

use crate::error::ScanError;

/// How a candidate file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Zip archive with a `modinfo.json` descriptor
    Archive,
    /// Single C# source file
    Source,
}

impl CandidateKind {
    /// File extensions (lower-case, without dot) handled by this kind.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Archive => &["zip"],
            Self::Source => &["cs"],
        }
    }

    /// Classify a path by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        [Self::Archive, Self::Source]
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }
}

/// A file in the mods folder that will be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub kind: CandidateKind,
}

impl Candidate {
    /// Build a candidate if the path has a recognized extension.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = CandidateKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    /// The name reported to the operator (file name only).
    pub fn file_name(&self) -> String {
        display_file_name(&self.path)
    }
}

/// Check that `folder` exists and is a directory.
pub fn validate_mods_dir(folder: &Path) -> Result<(), ScanError> {
    if !folder.exists() {
        return Err(ScanError::NotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(ScanError::NotADirectory(folder.to_path_buf()));
    }
    Ok(())
}

/// List the candidate files in `folder`, sorted by path.
///
/// Files with other extensions and all subdirectories are skipped; they
/// never appear in the manifest or the invalid list.
pub fn scan_candidates(folder: &Path) -> Result<Vec<Candidate>, ScanError> {
    validate_mods_dir(folder)?;
    let io_err = |source| ScanError::Io {
        path: folder.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = std::fs::read_dir(folder)
        .map_err(io_err)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let total = paths.len();
    let candidates: Vec<Candidate> = paths.into_iter().filter_map(Candidate::from_path).collect();
    if candidates.len() < total {
        log::debug!(
            "Ignored {} file(s) in {} (accepted extensions: {})",
            total - candidates.len(),
            folder.display(),
            supported_extensions().join(", ")
        );
    }
    Ok(candidates)
}

/// All extensions the scanner accepts, in classification order.
pub fn supported_extensions() -> Vec<&'static str> {
    [CandidateKind::Archive, CandidateKind::Source]
        .iter()
        .flat_map(|k| k.extensions().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_classifies_by_extension() {
        assert_eq!(CandidateKind::from_path(Path::new("a.zip")), Some(CandidateKind::Archive));
        assert_eq!(CandidateKind::from_path(Path::new("A.ZIP")), Some(CandidateKind::Archive));
        assert_eq!(CandidateKind::from_path(Path::new("b.cs")), Some(CandidateKind::Source));
        assert_eq!(CandidateKind::from_path(Path::new("c.dll")), None);
        assert_eq!(CandidateKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.zip"), b"").unwrap();
        fs::write(dir.path().join("a.cs"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("sub.zip")).unwrap();

        let candidates = scan_candidates(dir.path()).unwrap();
        let names: Vec<String> = candidates.iter().map(|c| c.file_name()).collect();
        assert_eq!(names, vec!["a.cs", "b.zip"]);
        assert_eq!(candidates[0].kind, CandidateKind::Source);
        assert_eq!(candidates[1].kind, CandidateKind::Archive);
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_candidates(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_file_is_not_a_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.zip");
        fs::write(&file, b"").unwrap();
        let err = scan_candidates(&file).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(supported_extensions(), vec!["zip", "cs"]);
    }
}
