// tests/config_options.rs
//
// Config file loading and ExportOptions path handling.
//
use std::{fs, path::PathBuf};

use pretty_assertions::assert_eq;

use course_explorer::config::{load_options, options::{AppOptions, ExportFormat}};
use course_explorer::error::ConfigError;

#[test]
fn missing_config_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let opts = load_options(&dir.path().join("course_explorer.toml")).unwrap();
    assert_eq!(opts, AppOptions::default());
}

#[test]
fn partial_config_overrides_only_named_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("course_explorer.toml");
    fs::write(
        &path,
        r#"
[sources]
catalogue = "data/catalogue.csv"

[export]
format = "tsv"

[durations]
hours_per_week = 8.0
"#,
    )
    .unwrap();

    let opts = load_options(&path).unwrap();
    assert_eq!(opts.sources.catalogue, PathBuf::from("data/catalogue.csv"));
    assert_eq!(opts.sources.tutors, PathBuf::from("tutors.csv"));
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(opts.export.include_headers);
    assert_eq!(opts.durations.hours_per_week, 8.0);
    assert_eq!(opts.durations.semester_hours, 45.0);
    assert!(opts.export.out_path().to_string_lossy().ends_with(".tsv"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("course_explorer.toml");
    fs::write(&path, "[export\nformat = ").unwrap();
    assert!(matches!(load_options(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn default_export_path_is_dated_under_out() {
    let opts = AppOptions::default();
    let p = opts.export.out_path();
    assert_eq!(p.parent(), Some(std::path::Path::new("out")));
    let name = p.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("courses_export_"), "{name}");
    assert!(name.ends_with(".csv"), "{name}");
    // courses_export_ + YYYYMMDD + .csv
    assert_eq!(name.len(), "courses_export_".len() + 8 + 4);
}
