//! Local side of the modlist pipeline: finding candidate files, reading
//! their metadata, and assembling the final manifest.

pub mod archive;
pub mod async_util;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod manifest;
pub mod normalize;
pub mod outcome;
pub mod progress;
pub mod scanner;
pub mod settings;
pub mod source;
pub mod util;
pub mod worker_pool;

pub use descriptor::{Descriptor, Field};
pub use error::{ManifestError, ReadError, ScanError, SettingsError};
pub use identity::{LocalIdentity, read_candidate};
pub use outcome::{CandidateOutcome, ScanReport, ScanStats};
pub use progress::ScanEvent;
pub use scanner::{Candidate, CandidateKind};
pub use settings::CatalogOverrides;

// Re-export core types so frontends only need this crate and the catalog crate.
pub use modlist_core::{
    CatalogEntry, CatalogRelease, FailureKind, LOCAL_ONLY, Manifest, ModRecord, Side,
    UNKNOWN_SIDE,
};
