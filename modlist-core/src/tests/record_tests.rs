use super::*;

fn record(mod_id: &str) -> ModRecord {
    ModRecord::local(mod_id, "1.0.0", mod_id, "")
}

#[test]
fn local_record_uses_placeholders() {
    let r = ModRecord::local("Foo", "1.0.0", "foo", "A mod");
    assert_eq!(r.side, "Unknown");
    assert_eq!(r.url_mod(), LOCAL_ONLY);
    assert_eq!(r.url_download(), LOCAL_ONLY);
    assert!(r.is_local_only());
}

#[test]
fn catalog_match_replaces_side_and_both_urls() {
    let r = ModRecord::local("Foo", "1.0.0", "foo", "").with_catalog_match(
        "both",
        "https://mods.vintagestory.at/show/mod/42",
        "https://moddbcdn.vintagestory.at/files/foo.zip",
    );
    assert_eq!(r.side, "both");
    assert_eq!(r.url_mod(), "https://mods.vintagestory.at/show/mod/42");
    assert_eq!(r.url_download(), "https://moddbcdn.vintagestory.at/files/foo.zip");
    assert!(!r.is_local_only());
}

#[test]
fn manifest_sorts_case_insensitively() {
    let manifest = Manifest::from_records(vec![record("Zeta"), record("alpha"), record("Beta")]);
    let ids: Vec<&str> = manifest.mods.iter().map(|m| m.mod_id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "Beta", "Zeta"]);
}

#[test]
fn manifest_puts_empty_ids_first() {
    let manifest = Manifest::from_records(vec![record("alpha"), record("")]);
    assert_eq!(manifest.mods[0].mod_id, "");
    assert_eq!(manifest.mods[1].mod_id, "alpha");
}

#[test]
fn manifest_sort_is_stable_for_case_variants() {
    let mut first = record("foo");
    first.name = "first".into();
    let mut second = record("FOO");
    second.name = "second".into();
    let manifest = Manifest::from_records(vec![first, second]);
    assert_eq!(manifest.mods[0].name, "first");
    assert_eq!(manifest.mods[1].name, "second");
}

#[test]
fn manifest_serializes_published_field_names() {
    let manifest = Manifest::from_records(vec![ModRecord::local("Foo", "1.0.0", "foo", "Ünïcode")]);
    let json = serde_json::to_value(&manifest).unwrap();
    let entry = &json["Mods"][0];
    assert_eq!(entry["Name"], "Foo");
    assert_eq!(entry["Version"], "1.0.0");
    assert_eq!(entry["ModId"], "foo");
    assert_eq!(entry["Description"], "Ünïcode");
    assert_eq!(entry["Side"], "Unknown");
    assert_eq!(entry["url_mod"], "Local mod only");
    assert_eq!(entry["url_download"], "Local mod only");
}

#[test]
fn manifest_field_order_follows_published_layout() {
    let manifest = Manifest::from_records(vec![record("foo")]);
    let text = serde_json::to_string(&manifest).unwrap();
    let positions: Vec<usize> = [
        "\"Name\"",
        "\"Version\"",
        "\"ModId\"",
        "\"Description\"",
        "\"Side\"",
        "\"url_mod\"",
        "\"url_download\"",
    ]
    .iter()
    .map(|key| text.find(key).unwrap())
    .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}
