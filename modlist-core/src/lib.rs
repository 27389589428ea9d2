//! Shared types for modlist: the manifest record, catalog data, and the
//! failure taxonomy used by every stage of the pipeline.

pub mod catalog;
pub mod error;
pub mod record;
pub mod side;
pub mod util;

pub use catalog::{CatalogEntry, CatalogRelease};
pub use error::FailureKind;
pub use record::{LOCAL_ONLY, Manifest, ModRecord, UNKNOWN_SIDE};
pub use side::{Side, SideParseError};
