// tests/export_rows.rs
use std::{fs, path::Path};

use pretty_assertions::assert_eq;

use course_explorer::catalogue::{load_catalogue, Catalogue};
use course_explorer::config::options::{ExportFormat, ExportOptions};
use course_explorer::data::{CatalogueView, Filters, SortMode};
use course_explorer::error::ExportError;
use course_explorer::file::{self, EXPORT_HEADERS};

fn load() -> Catalogue {
    let p = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalogue.csv");
    load_catalogue(&p).unwrap()
}

#[test]
fn csv_has_fixed_columns_and_view_order() {
    let cat = load();
    let f = Filters { domains: vec!["Data Literacy".into()], ..Default::default() };
    let view = CatalogueView::new(&cat, &f, SortMode::DurationDesc);

    let text = file::to_export_string(&ExportOptions::default(), &view).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], EXPORT_HEADERS.join(","));
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "Statistics Foundations,Data Literacy,edX,Intermediate,interactive,60.0,https://example.org/stats,Describe distributions and run basic hypothesis tests."
    );
    assert_eq!(
        lines[3],
        "Spreadsheet Skills,Data Literacy,LinkedIn Learning,Beginner,Passive,1.5,,\"Use formulas, pivot tables and charts.\""
    );
}

#[test]
fn tsv_without_headers() {
    let cat = load();
    let f = Filters { search: "Writing".into(), ..Default::default() };
    let view = CatalogueView::new(&cat, &f, SortMode::Relevance);

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let text = file::to_export_string(&opts, &view).unwrap();
    assert_eq!(
        text,
        "Writing for Impact\tCommunication\tCoursera\tAdvanced\tInteractive\t\thttps://example.org/write\t\n"
    );
}

#[test]
fn write_export_creates_missing_directory() {
    let cat = load();
    let view = CatalogueView::new(&cat, &Filters::default(), SortMode::Relevance);

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/out/");
    let mut opts = ExportOptions::default();
    opts.set_path(&target.join("picked.csv").to_string_lossy());

    let path = file::write_export(&opts, &view).unwrap();
    assert_eq!(path, dir.path().join("nested/out/picked.csv"));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, file::to_export_string(&opts, &view).unwrap());
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let cat = load();
    let view = CatalogueView::new(&cat, &Filters::default(), SortMode::Relevance);

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(&blocker.join("out.csv").to_string_lossy());

    let err = file::write_export(&opts, &view).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)), "{err}");
}

#[test]
fn empty_view_exports_header_only() {
    let cat = load();
    let f = Filters { search: "zzz".into(), ..Default::default() };
    let view = CatalogueView::new(&cat, &f, SortMode::Relevance);
    let text = file::to_export_string(&ExportOptions::default(), &view).unwrap();
    assert_eq!(text.lines().count(), 1);
}
