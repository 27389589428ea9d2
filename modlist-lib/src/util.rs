use std::path::{Path, PathBuf};

// Re-export core utilities so frontends need not depend on the core crate.
pub use modlist_core::util::*;

use crate::manifest::DEFAULT_MANIFEST_NAME;

/// Default manifest location: `{cwd}/modlist.json`.
pub fn default_manifest_path(cwd: &Path) -> PathBuf {
    cwd.join(DEFAULT_MANIFEST_NAME)
}

/// Number of workers to use when none is requested.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
