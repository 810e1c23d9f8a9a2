use std::collections::HashSet;

use goalboard::pins::{load_pinned_from, save_pinned_to};

#[test]
fn pinned_set_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("pinned_leagues.json");

    let mut pinned = HashSet::new();
    pinned.insert("LaLiga".to_string());
    pinned.insert("Eliteserien".to_string());

    save_pinned_to(&path, &pinned).expect("save should succeed");
    assert_eq!(load_pinned_from(&path), pinned);
}

#[test]
fn missing_file_reads_as_nothing_pinned() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("does_not_exist.json");
    assert!(load_pinned_from(&path).is_empty());
}

#[test]
fn corrupt_file_reads_as_nothing_pinned() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("pinned_leagues.json");
    std::fs::write(&path, "{broken").expect("write should succeed");
    assert!(load_pinned_from(&path).is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("nested").join("pinned_leagues.json");

    let mut pinned = HashSet::new();
    pinned.insert("Premier League".to_string());

    save_pinned_to(&path, &pinned).expect("save should succeed");
    assert_eq!(load_pinned_from(&path), pinned);
}
