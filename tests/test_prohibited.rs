use std::io::Cursor;

use rpawocheck::prohibited::ProhibitedSet;

#[test]
fn test_default_list_contains_classics() {
    let set = ProhibitedSet::default_list();
    assert!(!set.is_empty());
    assert!(set.contains("123456"));
    assert!(set.contains("password"));
    // Membership is case-insensitive through normalization
    assert!(set.contains("PASSWORD"));
}

#[test]
fn test_from_reader_normalizes_entries() {
    let set = ProhibitedSet::from_reader(Cursor::new("  QWERTY  \n\npassword\n")).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains("qwerty"));
    assert!(set.contains(" PassWord "));
}

#[test]
fn test_missing_file_degrades_to_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let set = ProhibitedSet::load(dir.path().join("does-not-exist.txt"));
    assert!(set.is_empty());
}

#[test]
fn test_load_reads_a_line_oriented_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");
    std::fs::write(&path, "hunter2\nTrustno1\n").unwrap();

    let set = ProhibitedSet::load(&path);
    assert_eq!(set.len(), 2);
    assert!(set.contains("hunter2"));
    assert!(set.contains("trustno1"));
}

#[test]
fn test_matches_within_finds_embedded_entries() {
    let mut set = ProhibitedSet::new();
    set.insert("password");
    assert!(set.matches_within("xxPASSWORDxx"));
    assert!(!set.matches_within("xxpasswoxx"));
}

#[test]
fn test_blank_entries_are_ignored() {
    let mut set = ProhibitedSet::new();
    set.insert("   ");
    assert!(set.is_empty());
    assert!(!set.contains(""));
}
