//! Per-candidate results and the manifest assembly step.

use modlist_core::{FailureKind, Manifest, ModRecord};

/// What processing one candidate produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    /// Local identity read and a catalog release matched
    Full(ModRecord),
    /// Local identity read, catalog step skipped or failed; record keeps placeholders
    Partial {
        record: ModRecord,
        /// `None` when the catalog step was skipped on purpose (offline mode)
        reason: Option<FailureKind>,
        detail: String,
    },
    /// Reader stage failed; the file is excluded from the manifest
    Excluded {
        file: String,
        reason: FailureKind,
        detail: String,
    },
}

/// Counts for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidates that made it into the manifest
    pub resolved: usize,
    /// Resolved candidates with a matching catalog release
    pub matched: usize,
    /// Resolved candidates left with placeholder URLs
    pub local_only: usize,
    /// Candidates excluded from the manifest
    pub invalid: usize,
}

/// Everything a scan produces: the manifest plus the operator-only invalid list.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub manifest: Manifest,
    /// File names of excluded candidates, in scan order
    pub invalid_files: Vec<String>,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Partition candidate outcomes and build the sorted manifest.
    ///
    /// `outcomes` may arrive in any order (workers finish out of order);
    /// each is tagged with its candidate index so the invalid list comes
    /// out in scan order.
    pub fn assemble(mut outcomes: Vec<(usize, CandidateOutcome)>) -> Self {
        outcomes.sort_by_key(|(index, _)| *index);

        let mut records = Vec::new();
        let mut invalid_files = Vec::new();
        let mut stats = ScanStats::default();

        for (_, outcome) in outcomes {
            match outcome {
                CandidateOutcome::Full(record) => {
                    stats.matched += 1;
                    records.push(record);
                }
                CandidateOutcome::Partial { record, .. } => {
                    stats.local_only += 1;
                    records.push(record);
                }
                CandidateOutcome::Excluded { file, .. } => {
                    invalid_files.push(file);
                }
            }
        }

        stats.resolved = records.len();
        stats.invalid = invalid_files.len();

        Self {
            manifest: Manifest::from_records(records),
            invalid_files,
            stats,
        }
    }
}
