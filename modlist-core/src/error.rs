use thiserror::Error;

/// Every way a candidate can fail to produce a complete record.
///
/// The reader-stage kinds exclude the candidate from the manifest; the
/// catalog-stage kinds only downgrade its record to placeholder values.
/// Stage errors (`ReadError`, `CatalogError`) each map onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FailureKind {
    #[error("corrupt archive")]
    CorruptArchive,

    #[error("descriptor missing")]
    DescriptorMissing,

    #[error("malformed descriptor")]
    MalformedDescriptor,

    #[error("required fields missing")]
    FieldExtractionIncomplete,

    #[error("unreadable file")]
    IoUnreadable,

    #[error("not found in catalog")]
    CatalogNotFound,

    #[error("catalog request timed out")]
    CatalogTimeout,

    #[error("catalog transport error")]
    CatalogTransportError,

    #[error("unexpected catalog response")]
    CatalogShapeError,

    #[error("no release for this version")]
    VersionNotMatched,
}

impl FailureKind {
    /// Whether this failure removes the candidate from the manifest.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::CorruptArchive
                | Self::DescriptorMissing
                | Self::MalformedDescriptor
                | Self::FieldExtractionIncomplete
                | Self::IoUnreadable
        )
    }
}
