//! Catalog side of the modlist pipeline: ModDB lookups, release matching,
//! download links, and the per-candidate reconciliation that ties them to
//! the local readers.

pub mod client;
pub mod error;
pub mod links;
pub mod matcher;
pub mod reconcile;
pub mod types;

pub use client::{CatalogEndpoints, CatalogLookup, ModDbClient};
pub use error::CatalogError;
pub use reconcile::{reconcile_candidate, resolve_identity, scan_mods};
