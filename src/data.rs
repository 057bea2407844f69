// src/data.rs
//
// Browse layer over a loaded catalogue.
//
// - Filters:       user predicates, combined with AND.
// - Facets:        distinct values offered by the filter widgets.
// - SortMode:      display order of the visible rows.
// - CatalogueView: zero-copy projection (row indices into the catalogue).
// - Stats:         headline numbers for the stats bar / `stats` command.
//
// Nothing here mutates the catalogue.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::catalogue::{Catalogue, NormalizedRecord};
use crate::config::consts::{
    DETAIL_OUTCOMES_MAX_CHARS, DETAIL_PREREQS_MAX_CHARS, DETAIL_SKILLS_MAX, DETAIL_SKILL_MAX_CHARS,
    TOP_SKILLS,
};
use crate::core::sanitize::{is_sentinel, truncate_chars};

/* ---------- filters ---------- */

#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring of title or either description
    pub search: String,
    pub domains: Vec<String>,
    /// Any selected skill contained in any tag (case-insensitive)
    pub skills: Vec<String>,
    pub levels: Vec<String>,
    /// Compared case-insensitively
    pub formats: Vec<String>,
    pub journey_stages: Vec<String>,
    pub platforms: Vec<String>,
    /// Inclusive hours; records without a duration always pass
    pub duration: Option<(f64, f64)>,
    pub show_without_link: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: s!(),
            domains: Vec::new(),
            skills: Vec::new(),
            levels: Vec::new(),
            formats: Vec::new(),
            journey_stages: Vec::new(),
            platforms: Vec::new(),
            duration: None,
            show_without_link: true,
        }
    }
}

fn member(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

impl Filters {
    pub fn matches(&self, r: &NormalizedRecord) -> bool {
        let q = self.search.trim().to_lowercase();
        if !q.is_empty() {
            let hit = r.title.to_lowercase().contains(&q)
                || r.short_description.to_lowercase().contains(&q)
                || r.full_description.as_deref().unwrap_or("").to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }

        if !member(&self.domains, &r.domain)
            || !member(&self.levels, &r.level)
            || !member(&self.journey_stages, &r.journey_stage)
            || !member(&self.platforms, &r.platform)
        {
            return false;
        }

        if !self.formats.is_empty() {
            let f = r.format.to_lowercase();
            if !self.formats.iter().any(|s| s.to_lowercase() == f) {
                return false;
            }
        }

        if !self.skills.is_empty() {
            let hit = self.skills.iter().any(|sel| {
                let sel = sel.to_lowercase();
                r.skill_tags.iter().any(|t| t.to_lowercase().contains(&sel))
            });
            if !hit {
                return false;
            }
        }

        if let (Some((lo, hi)), Some(d)) = (self.duration, r.duration_hours) {
            if d < lo || d > hi {
                return false;
            }
        }

        self.show_without_link || r.link().is_some()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/* ---------- facets ---------- */

/// Sorted distinct non-empty values per filterable field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Facets {
    pub domains: Vec<String>,
    pub skills: Vec<String>,
    pub levels: Vec<String>,
    pub formats: Vec<String>,
    pub journey_stages: Vec<String>,
    pub platforms: Vec<String>,
    /// `None` when there is nothing to slide over
    pub duration_range: Option<(f64, f64)>,
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

impl Facets {
    pub fn from_catalogue(cat: &Catalogue) -> Self {
        let recs = cat.records();
        let durations = recs.iter().filter_map(|r| r.duration_hours);
        let range = durations.fold(None, |acc: Option<(f64, f64)>, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        });

        Self {
            domains: distinct(recs.iter().map(|r| r.domain.as_str())),
            skills: distinct(recs.iter().flat_map(|r| r.skill_tags.iter().map(String::as_str))),
            levels: distinct(recs.iter().map(|r| r.level.as_str())),
            formats: distinct(recs.iter().map(|r| r.format.as_str())),
            journey_stages: distinct(recs.iter().map(|r| r.journey_stage.as_str())),
            platforms: distinct(recs.iter().map(|r| r.platform.as_str())),
            duration_range: range.filter(|(lo, hi)| lo < hi),
        }
    }
}

/* ---------- sort ---------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortMode {
    #[default]
    Relevance,
    DurationAsc,
    DurationDesc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Relevance,
        SortMode::DurationAsc,
        SortMode::DurationDesc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::DurationAsc => "Duration (Low to High)",
            SortMode::DurationDesc => "Duration (High to Low)",
            SortMode::TitleAsc => "Title (A-Z)",
            SortMode::TitleDesc => "Title (Z-A)",
        }
    }

    /// Stable; unknown durations sink to the bottom in both directions.
    pub fn apply(&self, cat: &Catalogue, row_ix: &mut [usize]) {
        let recs = cat.records();
        let dur = |i: usize| recs[i].duration_hours;
        match self {
            SortMode::Relevance => {}
            SortMode::DurationAsc | SortMode::DurationDesc => {
                let desc = matches!(self, SortMode::DurationDesc);
                row_ix.sort_by(|&a, &b| match (dur(a), dur(b)) {
                    (Some(x), Some(y)) if desc => y.total_cmp(&x),
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                });
            }
            SortMode::TitleAsc => row_ix.sort_by(|&a, &b| recs[a].title.cmp(&recs[b].title)),
            SortMode::TitleDesc => row_ix.sort_by(|&a, &b| recs[b].title.cmp(&recs[a].title)),
        }
    }
}

/* ---------- view ---------- */

/// Zero-copy filtered view for display and export.
/// Holds the visible rows as positions into the catalogue.
#[derive(Clone, Debug)]
pub struct CatalogueView<'a> {
    pub row_ix: Vec<usize>,
    catalogue: &'a Catalogue,
}

impl<'a> CatalogueView<'a> {
    /// Filter, then sort.
    pub fn new(catalogue: &'a Catalogue, filters: &Filters, sort: SortMode) -> Self {
        let mut row_ix: Vec<usize> = catalogue
            .iter()
            .enumerate()
            .filter(|(_, r)| filters.matches(r))
            .map(|(i, _)| i)
            .collect();
        sort.apply(catalogue, &mut row_ix);
        Self { row_ix, catalogue }
    }

    /// Wrap indices computed earlier (e.g. held by the GUI between frames).
    /// Out-of-range positions are dropped.
    pub fn from_indices(catalogue: &'a Catalogue, mut row_ix: Vec<usize>) -> Self {
        row_ix.retain(|&i| i < catalogue.len());
        Self { row_ix, catalogue }
    }

    pub fn catalogue(&self) -> &'a Catalogue { self.catalogue }
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow the i-th visible record (no cloning).
    pub fn get(&self, i: usize) -> Option<&'a NormalizedRecord> {
        self.row_ix.get(i).and_then(|&ix| self.catalogue.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a NormalizedRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.catalogue.get(ix))
    }
}

/* ---------- stats ---------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub domains: usize,
    pub platforms: usize,
    pub visible: usize,
    /// (tag, count), most frequent first
    pub top_skills: Vec<(String, usize)>,
    pub with_duration: usize,

    // Over the visible rows only.
    pub avg_duration: Option<f64>,
    pub top_platform: Option<String>,
    pub top_level: Option<String>,
}

/// Most frequent non-empty value; ties go to the smallest.
fn mode<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values.filter(|v| !v.is_empty()) {
        *counts.entry(v).or_default() += 1;
    }
    // BTreeMap iterates ascending; keep the first max seen.
    let mut best: Option<(&str, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, b)| n > b) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| s!(v))
}

/// Top `n` tags by count; ties keep first-seen order.
fn top_tags<'a>(tags: impl Iterator<Item = &'a str>, n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in tags.filter(|t| !t.is_empty()) {
        let c = counts.entry(t).or_insert_with(|| {
            order.push(t);
            0
        });
        *c += 1;
    }
    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|t| (t, counts[t])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(t, c)| (s!(t), c)).collect()
}

impl Stats {
    pub fn compute(view: &CatalogueView<'_>) -> Self {
        let cat = view.catalogue();
        let recs = cat.records();

        let known: Vec<f64> = view.iter().filter_map(|r| r.duration_hours).collect();
        let avg_duration = (!known.is_empty()).then(|| known.iter().sum::<f64>() / known.len() as f64);

        Self {
            total: cat.len(),
            domains: distinct(recs.iter().map(|r| r.domain.as_str())).len(),
            platforms: distinct(recs.iter().map(|r| r.platform.as_str())).len(),
            visible: view.len(),
            top_skills: top_tags(
                recs.iter().flat_map(|r| r.skill_tags.iter().map(String::as_str)),
                TOP_SKILLS,
            ),
            with_duration: recs.iter().filter(|r| r.has_duration()).count(),
            avg_duration,
            top_platform: mode(view.iter().map(|r| r.platform.as_str())),
            top_level: mode(view.iter().map(|r| r.level.as_str())),
        }
    }
}

/* ---------- record display helpers ---------- */

/// "~120h est." for long courses, "2.5h" otherwise, raw text when unparsed.
pub fn duration_display(r: &NormalizedRecord) -> String {
    match r.duration_hours {
        Some(h) if h >= 100.0 => format!("~{}h est.", ((h / 10.0).floor() * 10.0) as i64),
        Some(h) => format!("{h:.1}h"),
        None => match r.length_raw.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => s!(raw),
            _ => s!("Duration TBD"),
        },
    }
}

/// Learning outcomes for the detail pane.
/// Placeholders the sheet uses for "nothing here" in the detail columns.
fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == "None" || is_sentinel(text)
}

pub fn detail_outcomes(r: &NormalizedRecord) -> Option<String> {
    let text = r.full_description.as_deref()?.trim();
    (!is_placeholder(text)).then(|| truncate_chars(text, DETAIL_OUTCOMES_MAX_CHARS))
}

pub fn detail_prerequisites(r: &NormalizedRecord) -> Option<String> {
    let text = r.prerequisites.as_deref()?.trim();
    (!is_placeholder(text)).then(|| truncate_chars(text, DETAIL_PREREQS_MAX_CHARS))
}

/// Short tags only; long prose-like entries are noise in the pill list.
pub fn detail_skills(r: &NormalizedRecord) -> Vec<&str> {
    r.skill_tags
        .iter()
        .map(String::as_str)
        .filter(|t| t.chars().count() < DETAIL_SKILL_MAX_CHARS)
        .take(DETAIL_SKILLS_MAX)
        .collect()
}
