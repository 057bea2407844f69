// src/catalogue/pipeline.rs
//
// Loader stages. Each one is a plain function over owned rows so they can be
// tested in isolation:
//
//   read_source → to_raw_records → fill_down(domain, focus_area)
//               → retain_titled → normalize_record (per row, id = position)

use std::io;

use super::columns::{ColumnMap, Field};
use super::record::{NormalizedRecord, RawRecord};
use crate::config::consts::{SHORT_DESCRIPTION_WIDTH, SKILL_TAG_MAX_CHARS};
use crate::core::duration::{parse_duration_with, DurationHeuristics};
use crate::core::sanitize::{clean_text, is_blank, shorten, split_list, truncate_chars};
use crate::error::LoadError;

/// Columns the source sheet leaves blank under a section heading.
pub const FILL_DOWN: [Field; 2] = [Field::Domain, Field::FocusArea];

/// Header row plus string cells; `None` for empty or absent cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Read every row as text. Ragged rows are accepted; nothing is coerced.
pub fn read_source<R: io::Read>(reader: R) -> Result<SourceTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| s!(h.trim_start_matches('\u{feff}')))
        .collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(
            rec.iter()
                .map(|cell| (!cell.is_empty()).then(|| s!(cell)))
                .collect(),
        );
    }

    Ok(SourceTable { headers, rows })
}

/// Replace each gap (missing or whitespace-only) with the nearest non-gap
/// value above it. Leading gaps are left alone.
fn fill_gaps<'a>(slots: impl Iterator<Item = &'a mut Option<String>>) {
    let mut last: Option<String> = None;
    for slot in slots {
        if is_blank(slot.as_deref()) {
            if let Some(v) = &last {
                *slot = Some(v.clone());
            }
        } else {
            last = slot.clone();
        }
    }
}

/// Column form of the fill; see [`fill_down`] for the record form.
pub fn forward_fill(mut values: Vec<Option<String>>) -> Vec<Option<String>> {
    fill_gaps(values.iter_mut());
    values
}

pub fn fill_down(records: &mut [RawRecord], field: Field) {
    fill_gaps(records.iter_mut().map(|r| r.slot_mut(field)));
}

/// Map source columns onto fields. Fails only when there is no title column.
pub fn to_raw_records(table: SourceTable) -> Result<Vec<RawRecord>, LoadError> {
    let map = ColumnMap::from_headers(&table.headers);
    if !map.contains(Field::Title) {
        return Err(LoadError::MissingColumn(Field::Title.source_label()));
    }

    let records = table
        .rows
        .into_iter()
        .map(|mut row| {
            let mut rec = RawRecord::default();
            for (field, ix) in map.iter() {
                *rec.slot_mut(field) = row.get_mut(ix).and_then(Option::take);
            }
            rec
        })
        .collect();
    Ok(records)
}

/// Drop section/heading rows: anything without a usable title.
pub fn retain_titled(records: &mut Vec<RawRecord>) {
    let before = records.len();
    records.retain(|r| !is_blank(r.title.as_deref()));
    let dropped = before - records.len();
    if dropped > 0 {
        logd!("Load: dropped {} untitled row(s)", dropped);
    }
}

/// Comma-split skill list with over-long parts cut down.
pub fn skill_tags(priority_skills: &str) -> Vec<String> {
    let s = priority_skills.trim();
    if s.is_empty() || s == "nan" || s == "None" {
        return Vec::new();
    }
    split_list(s)
        .into_iter()
        .map(|part| truncate_chars(&part, SKILL_TAG_MAX_CHARS))
        .collect()
}

pub fn normalize_record(id: usize, raw: RawRecord, h: &DurationHeuristics) -> NormalizedRecord {
    let priority_skills = clean_text(raw.priority_skills.as_deref());
    let short_description = shorten(
        raw.full_description.as_deref().unwrap_or(""),
        SHORT_DESCRIPTION_WIDTH,
    );
    let duration_hours = raw.length_raw.as_deref().and_then(|s| parse_duration_with(s, h));

    NormalizedRecord {
        id,
        domain: clean_text(raw.domain.as_deref()),
        focus_area: clean_text(raw.focus_area.as_deref()),
        title: raw.title.as_deref().map(str::trim).map(String::from).unwrap_or_default(),
        platform: clean_text(raw.platform.as_deref()),
        resource_type: clean_text(raw.resource_type.as_deref()),
        level: clean_text(raw.level.as_deref()),
        format: clean_text(raw.format.as_deref()),
        journey_stage: clean_text(raw.journey_stage.as_deref()),
        skill_tags: skill_tags(&priority_skills),
        priority_skills,

        lms_link: raw.lms_link,
        full_description: raw.full_description,
        prerequisites: raw.prerequisites,
        length_raw: raw.length_raw,
        audience: raw.audience,
        publication_date: raw.publication_date,
        last_updated: raw.last_updated,
        captions: raw.captions,
        mobile_accessible: raw.mobile_accessible,
        comments: raw.comments,

        short_description,
        duration_hours,
    }
}

/// All stages, in order.
pub fn run<R: io::Read>(reader: R, h: &DurationHeuristics) -> Result<Vec<NormalizedRecord>, LoadError> {
    let table = read_source(reader)?;
    let mut records = to_raw_records(table)?;
    for field in FILL_DOWN {
        fill_down(&mut records, field);
    }
    retain_titled(&mut records);

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(id, raw)| normalize_record(id, raw, h))
        .collect())
}
