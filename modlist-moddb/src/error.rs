use modlist_core::FailureKind;

/// Errors from resolving a mod id against the ModDB catalog.
///
/// None of these stop a scan; the candidate keeps its placeholder
/// distribution fields.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Mod ID {0} not found on ModDB")]
    NotFound(String),

    #[error("Timeout when fetching API info")]
    Timeout,

    #[error("HTTP error {status} when fetching API info")]
    HttpStatus { status: u16 },

    #[error("Error fetching API info: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected API response format: {0}")]
    Shape(String),

    #[error("No release matches version {0}")]
    VersionNotMatched(String),
}

impl CatalogError {
    /// Classify a reqwest failure (send or body read).
    pub fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            Self::Transport(e)
        }
    }

    /// The taxonomy entry this error reports as.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::CatalogNotFound,
            Self::Timeout => FailureKind::CatalogTimeout,
            Self::HttpStatus { .. } | Self::Transport(_) => FailureKind::CatalogTransportError,
            Self::Shape(_) => FailureKind::CatalogShapeError,
            Self::VersionNotMatched(_) => FailureKind::VersionNotMatched,
        }
    }

    /// Not-found and version mismatches are ordinary outcomes, not faults.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::VersionNotMatched(_))
    }
}
