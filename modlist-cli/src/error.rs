use modlist_lib::{ManifestError, ScanError, SettingsError};
use modlist_moddb::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Missing or unreadable configuration
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// The mods folder could not be listed
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// modlist.json could not be written
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    /// The HTTP client could not be built
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// A follow-up line telling the operator what to do about it.
    pub(crate) fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Settings(SettingsError::NoModsDir(_)) => Some(
                "Pass --mods-dir, add [ModPath] path = \"...\" to config.toml, or run 'modlist config set-path <dir>'.",
            ),
            Self::Manifest(ManifestError::PermissionDenied(_)) => {
                Some("Try running with sufficient permissions, or choose another --output.")
            }
            _ => None,
        }
    }
}
