use super::*;

#[test]
fn test_default_manifest_path() {
    assert_eq!(
        default_manifest_path(Path::new("/games/vs")),
        PathBuf::from("/games/vs/modlist.json")
    );
}

#[test]
fn test_default_worker_count_is_positive() {
    assert!(default_worker_count() >= 1);
}

#[test]
fn test_reexported_sort_key() {
    assert_eq!(sort_key("MixedCase"), "mixedcase");
}
