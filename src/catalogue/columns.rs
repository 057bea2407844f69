// src/catalogue/columns.rs
//
// Source header text → canonical field. Header text in the curation sheet
// drifts ("Format type (passive / interactive)" vs "...(passive/interactive)"),
// so matching goes through `normalize_header` on both sides.

/// Canonical record fields, in source-sheet order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Domain,
    FocusArea,
    Title,
    LmsLink,
    Platform,
    ResourceType,
    FullDescription,
    Prerequisites,
    LengthRaw,
    Level,
    Audience,
    Format,
    PublicationDate,
    LastUpdated,
    Captions,
    MobileAccessible,
    PrioritySkills,
    JourneyStage,
    Comments,
}

/// (source header, field). Fixed and order-independent.
pub const SOURCE_COLUMNS: [(&str, Field); 19] = [
    ("Competency domain", Field::Domain),
    ("Focus Areas", Field::FocusArea),
    ("Resource title", Field::Title),
    ("URL", Field::LmsLink),
    ("Platform / host", Field::Platform),
    ("Resource type", Field::ResourceType),
    ("Stated learning outcomes", Field::FullDescription),
    ("Stated prerequisites", Field::Prerequisites),
    ("Length (mins)", Field::LengthRaw),
    ("Indicated level", Field::Level),
    ("Intended audience", Field::Audience),
    ("Format type (passive / interactive)", Field::Format),
    ("Publication date", Field::PublicationDate),
    ("Last updated", Field::LastUpdated),
    ("Captions/transcripts", Field::Captions),
    ("Mobile accessible", Field::MobileAccessible),
    ("Skill area", Field::PrioritySkills),
    ("Student journey stage", Field::JourneyStage),
    ("Comments", Field::Comments),
];

impl Field {
    pub const ALL: [Field; 19] = {
        let mut out = [Field::Domain; 19];
        let mut i = 0;
        while i < 19 {
            out[i] = SOURCE_COLUMNS[i].1;
            i += 1;
        }
        out
    };

    /// snake_case name used in JSON output and CLI flags.
    pub fn name(self) -> &'static str {
        match self {
            Field::Domain => "domain",
            Field::FocusArea => "focus_area",
            Field::Title => "title",
            Field::LmsLink => "lms_link",
            Field::Platform => "platform",
            Field::ResourceType => "resource_type",
            Field::FullDescription => "full_description",
            Field::Prerequisites => "prerequisites",
            Field::LengthRaw => "length_raw",
            Field::Level => "level",
            Field::Audience => "audience",
            Field::Format => "format",
            Field::PublicationDate => "publication_date",
            Field::LastUpdated => "last_updated",
            Field::Captions => "captions",
            Field::MobileAccessible => "mobile_accessible",
            Field::PrioritySkills => "priority_skills",
            Field::JourneyStage => "journey_stage",
            Field::Comments => "comments",
        }
    }

    /// Header text as it appears in the source sheet.
    pub fn source_label(self) -> &'static str {
        SOURCE_COLUMNS
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(label, _)| *label)
            .unwrap_or("")
    }
}

/// Trim, collapse inner whitespace, drop spaces around '/', lowercase.
pub fn normalize_header(h: &str) -> String {
    let squeezed = crate::core::sanitize::normalize_ws(h.trim_start_matches('\u{feff}'));
    squeezed
        .replace(" / ", "/")
        .replace(" /", "/")
        .replace("/ ", "/")
        .to_lowercase()
}

pub fn field_for_header(h: &str) -> Option<Field> {
    let key = normalize_header(h);
    SOURCE_COLUMNS
        .iter()
        .find(|(label, _)| normalize_header(label) == key)
        .map(|(_, f)| *f)
}

/// Field → source column position. Built once per table from its header row.
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    slots: Vec<(Field, usize)>,
}

impl ColumnMap {
    /// Unknown headers are skipped. A repeated header keeps its first column.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut slots: Vec<(Field, usize)> = Vec::with_capacity(SOURCE_COLUMNS.len());
        for (ix, h) in headers.iter().enumerate() {
            let Some(field) = field_for_header(h.as_ref()) else { continue };
            if slots.iter().any(|(f, _)| *f == field) {
                logd!("Load: duplicate header {:?} at column {}, ignored", h.as_ref(), ix);
                continue;
            }
            slots.push((field, ix));
        }
        Self { slots }
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.slots.iter().find(|(f, _)| *f == field).map(|(_, ix)| *ix)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.index_of(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_spacing_is_ignored() {
        assert_eq!(field_for_header("Format type (passive/interactive)"), Some(Field::Format));
        assert_eq!(field_for_header("Format type (passive / interactive)"), Some(Field::Format));
        assert_eq!(field_for_header("Platform/host"), Some(Field::Platform));
        assert_eq!(field_for_header("  captions / transcripts "), Some(Field::Captions));
    }

    #[test]
    fn case_and_bom_are_ignored() {
        assert_eq!(field_for_header("\u{feff}Competency domain"), Some(Field::Domain));
        assert_eq!(field_for_header("RESOURCE TITLE"), Some(Field::Title));
        assert_eq!(field_for_header("Unrelated"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let map = ColumnMap::from_headers(&["Resource title", "URL", "Resource title"]);
        assert_eq!(map.index_of(Field::Title), Some(0));
        assert_eq!(map.index_of(Field::LmsLink), Some(1));
        assert!(!map.contains(Field::Domain));
    }

    #[test]
    fn all_fields_have_labels() {
        for f in Field::ALL {
            assert!(!f.source_label().is_empty(), "{}", f.name());
        }
    }
}
