use std::path::PathBuf;

use modlist_core::FailureKind;

/// Progress events emitted during a scan, consumed by the CLI.
///
/// Events are observational only; dropping them does not change the result.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Listing the mods folder.
    Scanning { dir: PathBuf },
    /// Listing complete, total candidates found.
    ScanComplete { total: usize },
    /// A worker picked up a candidate.
    CandidateStarted { index: usize, file: String },
    /// Querying the catalog for a candidate's mod id.
    CandidateLookingUp {
        index: usize,
        file: String,
        mod_id: String,
    },
    /// Candidate included in the manifest.
    CandidateResolved {
        index: usize,
        file: String,
        mod_id: String,
        /// `None` when a catalog release matched
        degraded: Option<FailureKind>,
    },
    /// Candidate excluded from the manifest.
    CandidateInvalid {
        index: usize,
        file: String,
        reason: String,
    },
    /// All candidates processed.
    Done,
}

impl ScanEvent {
    /// True for the one event each candidate emits when it finishes.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::CandidateResolved { .. } | Self::CandidateInvalid { .. }
        )
    }
}
