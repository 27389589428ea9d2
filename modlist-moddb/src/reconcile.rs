//! Per-candidate reconciliation and the folder-level scan.
//!
//! Each candidate goes through read, resolve, merge. A read failure
//! excludes the candidate; anything that goes wrong after that only
//! leaves the record with its placeholder side and URLs.

use std::path::Path;

use modlist_lib::identity::{self, LocalIdentity};
use modlist_lib::scanner::{self, Candidate};
use modlist_lib::worker_pool::WorkerPool;
use modlist_lib::{CandidateOutcome, ModRecord, ReadError, ScanError, ScanEvent, ScanReport};
use tokio::sync::mpsc;

use crate::client::{CatalogLookup, ModDbClient};
use crate::error::CatalogError;
use crate::links;
use crate::matcher;

/// Resolve a candidate's local identity against the catalog.
///
/// `client` is `None` in offline mode, in which case no request is made.
pub async fn resolve_identity(
    client: Option<&ModDbClient>,
    identity: &LocalIdentity,
) -> CandidateOutcome {
    let record = identity.baseline_record();

    let Some(client) = client else {
        return CandidateOutcome::Partial {
            record,
            reason: None,
            detail: "offline".to_string(),
        };
    };

    let entry = match client.lookup(&identity.mod_id).await {
        CatalogLookup::Found(entry) => entry,
        CatalogLookup::Skipped => {
            return CandidateOutcome::Partial {
                record,
                reason: None,
                detail: "no mod id".to_string(),
            };
        }
        CatalogLookup::Failed(e) => return degraded(record, e),
    };

    match matcher::main_file_for_version(&identity.version, &entry.releases) {
        Some(main_file) => {
            let endpoints = client.endpoints();
            CandidateOutcome::Full(record.with_catalog_match(
                entry.side.as_str(),
                links::mod_page_url(&endpoints.page_base, entry.asset_id),
                links::download_link(main_file, &endpoints.download_base),
            ))
        }
        None => degraded(record, CatalogError::VersionNotMatched(identity.version.clone())),
    }
}

fn degraded(record: ModRecord, e: CatalogError) -> CandidateOutcome {
    if e.is_informational() {
        log::info!("{} ({}): {}", record.mod_id, record.version, e);
    } else {
        log::warn!("{} ({}): {}", record.mod_id, record.version, e);
    }
    CandidateOutcome::Partial {
        record,
        reason: Some(e.kind()),
        detail: e.to_string(),
    }
}

/// Process one candidate from file to outcome, emitting progress events.
pub async fn reconcile_candidate(
    client: Option<&ModDbClient>,
    index: usize,
    candidate: Candidate,
    events: &mpsc::UnboundedSender<ScanEvent>,
) -> CandidateOutcome {
    let file = candidate.file_name();
    let _ = events.send(ScanEvent::CandidateStarted {
        index,
        file: file.clone(),
    });

    let read = tokio::task::spawn_blocking(move || identity::read_candidate(&candidate))
        .await
        .unwrap_or_else(|e| Err(ReadError::IoUnreadable(std::io::Error::other(e.to_string()))));

    let identity = match read {
        Ok(identity) => identity,
        Err(e) => {
            log::warn!("{}: {}", file, e);
            let _ = events.send(ScanEvent::CandidateInvalid {
                index,
                file: file.clone(),
                reason: e.to_string(),
            });
            return CandidateOutcome::Excluded {
                file,
                reason: e.kind(),
                detail: e.to_string(),
            };
        }
    };

    if client.is_some() {
        let _ = events.send(ScanEvent::CandidateLookingUp {
            index,
            file: file.clone(),
            mod_id: identity.mod_id.clone(),
        });
    }

    let outcome = resolve_identity(client, &identity).await;
    let reason = match &outcome {
        CandidateOutcome::Partial { reason, .. } => *reason,
        _ => None,
    };
    log::debug!("{} -> {} ({})", file, identity.mod_id, identity.version);
    let _ = events.send(ScanEvent::CandidateResolved {
        index,
        file,
        mod_id: identity.mod_id,
        degraded: reason,
    });
    outcome
}

/// Scan a mods folder and reconcile every candidate.
///
/// At most `max_workers` candidates are processed at once, which also caps
/// concurrent catalog requests. Results are merged only after every
/// candidate has finished. The only errors are failures to list `dir`.
pub async fn scan_mods(
    client: Option<ModDbClient>,
    dir: &Path,
    max_workers: usize,
    events: mpsc::UnboundedSender<ScanEvent>,
) -> Result<ScanReport, ScanError> {
    let _ = events.send(ScanEvent::Scanning {
        dir: dir.to_path_buf(),
    });
    let candidates = scanner::scan_candidates(dir)?;
    let total = candidates.len();
    let _ = events.send(ScanEvent::ScanComplete { total });
    log::debug!(
        "Found {} candidate(s) in {}, {} worker(s)",
        total,
        dir.display(),
        max_workers
    );

    let worker_events = events.clone();
    let pool = WorkerPool::start(
        max_workers,
        candidates.into_iter().enumerate().collect(),
        move |(index, candidate): (usize, Candidate)| {
            let client = client.clone();
            let events = worker_events.clone();
            async move {
                let outcome = reconcile_candidate(client.as_ref(), index, candidate, &events).await;
                (index, outcome)
            }
        },
    );

    let report = ScanReport::assemble(pool.collect().await);
    let _ = events.send(ScanEvent::Done);
    Ok(report)
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
