use std::path::Path;

/// Case-insensitive ordering key for mod ids. Empty ids sort first.
pub fn sort_key(mod_id: &str) -> String {
    mod_id.to_lowercase()
}

/// File name of a path for operator-facing reports, falling back to the
/// full path when there is no final component.
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pluralize a count for summaries (e.g., "1 mod", "3 mods").
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
