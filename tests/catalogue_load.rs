// tests/catalogue_load.rs
//
// End-to-end loader behavior on a small curation-sheet fixture.
//
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use course_explorer::catalogue::{load_catalogue, Catalogue};
use course_explorer::core::duration::DurationHeuristics;
use course_explorer::error::LoadError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn load() -> Catalogue {
    load_catalogue(&fixture("catalogue.csv")).unwrap()
}

#[test]
fn section_rows_and_blank_titles_are_dropped() {
    let cat = load();
    let titles: Vec<&str> = cat.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Intro to SQL",
            "Spreadsheet Skills",
            "Statistics Foundations",
            "Speak with Confidence",
            "Writing for Impact",
        ]
    );
}

#[test]
fn ids_are_contiguous_from_zero() {
    let cat = load();
    for (i, r) in cat.iter().enumerate() {
        assert_eq!(r.id, i);
        assert_eq!(cat.get(i).map(|x| x.id), Some(i));
    }
}

#[test]
fn hierarchy_columns_are_filled_down() {
    let cat = load();
    let pairs: Vec<(&str, &str)> = cat
        .iter()
        .map(|r| (r.domain.as_str(), r.focus_area.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Data Literacy", "Data Analysis"),
            ("Data Literacy", "Data Analysis"),
            ("Data Literacy", "Data Analysis"),
            ("Communication", "Public Speaking"),
            ("Communication", "Public Speaking"),
        ]
    );
}

#[test]
fn durations_are_parsed_per_row() {
    let cat = load();
    let hours: Vec<Option<f64>> = cat.iter().map(|r| r.duration_hours).collect();
    assert_eq!(hours, vec![Some(4.0), Some(1.5), Some(60.0), Some(45.0), None]);
    assert_eq!(cat.get(4).and_then(|r| r.length_raw.as_deref()), Some("TBD"));
}

#[test]
fn sentinels_clean_and_passthrough_stays_raw() {
    let cat = load();
    let speak = cat.get(3).unwrap();
    assert_eq!(speak.level, "");
    assert_eq!(speak.prerequisites.as_deref(), Some("Not Stated"));

    let sheets = cat.get(1).unwrap();
    assert_eq!(sheets.lms_link, None);
    assert_eq!(sheets.comments.as_deref(), Some("Link pending"));
    assert_eq!(sheets.short_description, "Use formulas, pivot tables and charts.");
}

#[test]
fn skill_tags_split_and_skip_placeholders() {
    let cat = load();
    assert_eq!(cat.get(0).unwrap().skill_tags, vec!["SQL", "Data Analysis"]);
    assert_eq!(cat.get(3).unwrap().skill_tags, vec!["Presentation", "Communication"]);
    assert!(cat.get(4).unwrap().skill_tags.is_empty());
}

#[test]
fn loading_twice_is_identical() {
    assert_eq!(load(), load());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_catalogue(&fixture("does_not_exist.csv")).unwrap_err();
    assert!(err.is_not_found(), "{err}");
}

#[test]
fn missing_title_column_is_reported() {
    let csv = "Competency domain,URL\nData,https://x\n";
    let err = Catalogue::from_reader(csv.as_bytes(), &DurationHeuristics::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn(_)), "{err}");
}

#[test]
fn header_spacing_variants_map_to_format() {
    let csv = "Resource title,Format type (passive / interactive)\nA,Passive\n";
    let cat = Catalogue::from_reader(csv.as_bytes(), &DurationHeuristics::default()).unwrap();
    assert_eq!(cat.get(0).unwrap().format, "Passive");
}

#[test]
fn short_description_respects_width() {
    let long = "word ".repeat(120);
    let csv = format!("Resource title,Stated learning outcomes\nA,{long}\n");
    let cat = Catalogue::from_reader(csv.as_bytes(), &DurationHeuristics::default()).unwrap();
    let short = &cat.get(0).unwrap().short_description;
    assert!(short.chars().count() <= 250);
    assert!(short.ends_with('…'));
}
