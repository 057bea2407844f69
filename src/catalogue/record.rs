// src/catalogue/record.rs
use serde::Serialize;

use super::columns::Field;

/// One source row by field. `None` = absent column, short row, or empty cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub domain: Option<String>,
    pub focus_area: Option<String>,
    pub title: Option<String>,
    pub lms_link: Option<String>,
    pub platform: Option<String>,
    pub resource_type: Option<String>,
    pub full_description: Option<String>,
    pub prerequisites: Option<String>,
    pub length_raw: Option<String>,
    pub level: Option<String>,
    pub audience: Option<String>,
    pub format: Option<String>,
    pub publication_date: Option<String>,
    pub last_updated: Option<String>,
    pub captions: Option<String>,
    pub mobile_accessible: Option<String>,
    pub priority_skills: Option<String>,
    pub journey_stage: Option<String>,
    pub comments: Option<String>,
}

impl RawRecord {
    pub fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Domain => &mut self.domain,
            Field::FocusArea => &mut self.focus_area,
            Field::Title => &mut self.title,
            Field::LmsLink => &mut self.lms_link,
            Field::Platform => &mut self.platform,
            Field::ResourceType => &mut self.resource_type,
            Field::FullDescription => &mut self.full_description,
            Field::Prerequisites => &mut self.prerequisites,
            Field::LengthRaw => &mut self.length_raw,
            Field::Level => &mut self.level,
            Field::Audience => &mut self.audience,
            Field::Format => &mut self.format,
            Field::PublicationDate => &mut self.publication_date,
            Field::LastUpdated => &mut self.last_updated,
            Field::Captions => &mut self.captions,
            Field::MobileAccessible => &mut self.mobile_accessible,
            Field::PrioritySkills => &mut self.priority_skills,
            Field::JourneyStage => &mut self.journey_stage,
            Field::Comments => &mut self.comments,
        }
    }
}

/// A cleaned, derived catalogue entry. Immutable once the loader hands it out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: usize,

    // Cleaned: trimmed, sentinels collapsed to "".
    pub domain: String,
    pub focus_area: String,
    pub title: String,
    pub platform: String,
    pub resource_type: String,
    pub level: String,
    pub format: String,
    pub journey_stage: String,
    pub priority_skills: String,

    // Pass-through, exactly as read.
    pub lms_link: Option<String>,
    pub full_description: Option<String>,
    pub prerequisites: Option<String>,
    pub length_raw: Option<String>,
    pub audience: Option<String>,
    pub publication_date: Option<String>,
    pub last_updated: Option<String>,
    pub captions: Option<String>,
    pub mobile_accessible: Option<String>,
    pub comments: Option<String>,

    // Derived.
    pub short_description: String,
    pub duration_hours: Option<f64>,
    pub skill_tags: Vec<String>,
}

impl NormalizedRecord {
    /// Non-blank link, if any.
    pub fn link(&self) -> Option<&str> {
        self.lms_link.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn has_duration(&self) -> bool {
        self.duration_hours.is_some()
    }
}
