// tests/tutors.rs
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use course_explorer::tutors::{load_tutors, TUTOR_HEADERS};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn loads_named_tutors_in_source_order() {
    let table = load_tutors(&fixture("tutors.csv")).unwrap();
    let names: Vec<&str> = table.tutors.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Alan Turing"]);
}

#[test]
fn matching_uses_focus_as_substring_of_expertise() {
    let table = load_tutors(&fixture("tutors.csv")).unwrap();

    let data: Vec<&str> = table.matching("data").map(|t| t.name.as_str()).collect();
    assert_eq!(data, vec!["Ada Lovelace"]);

    let speaking: Vec<&str> = table.matching("Public Speaking").map(|t| t.name.as_str()).collect();
    assert_eq!(speaking, vec!["Grace Hopper"]);

    assert_eq!(table.matching("Underwater Basket Weaving").count(), 0);
}

#[test]
fn missing_file_gives_empty_table_with_headers() {
    let dir = tempfile::tempdir().unwrap();
    let table = load_tutors(&dir.path().join("tutors.csv")).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.headers, TUTOR_HEADERS);
}

#[test]
fn directory_instead_of_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_tutors(dir.path()).is_err());
}
