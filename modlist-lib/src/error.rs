use std::path::PathBuf;

use modlist_core::FailureKind;
use thiserror::Error;

/// Reasons a candidate file could not produce a local identity.
///
/// Every variant is terminal for its candidate: the file is left out of
/// the manifest and listed as invalid.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The archive failed to open or an entry failed its integrity check
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// The archive has no descriptor entry at its root
    #[error("no {0} found in archive")]
    DescriptorMissing(&'static str),

    /// The descriptor could not be decoded or parsed, even after repair
    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(String),

    /// One or more required identity fields were absent or empty
    #[error("missing required fields: {}", .0.join(", "))]
    FieldExtractionIncomplete(Vec<&'static str>),

    /// The file itself could not be opened or read
    #[error("unreadable file: {0}")]
    IoUnreadable(#[from] std::io::Error),
}

impl ReadError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptArchive(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDescriptor(msg.into())
    }

    /// The taxonomy entry this error reports as.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::CorruptArchive(_) => FailureKind::CorruptArchive,
            Self::DescriptorMissing(_) => FailureKind::DescriptorMissing,
            Self::MalformedDescriptor(_) => FailureKind::MalformedDescriptor,
            Self::FieldExtractionIncomplete(_) => FailureKind::FieldExtractionIncomplete,
            Self::IoUnreadable(_) => FailureKind::IoUnreadable,
        }
    }
}

/// Errors that stop a scan before any candidate is processed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("the directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors writing the manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no write permission for {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No CLI flag, project config, or user settings named a mods directory
    #[error("no mods directory configured (looked in: {})", format_paths(.0))]
    NoModsDir(Vec<PathBuf>),

    #[error("invalid config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
