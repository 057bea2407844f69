// src/tutors.rs
//
// Optional tutor directory. A missing file is normal (no tutors yet) and
// yields an empty table with the usual headers; anything else that goes
// wrong while reading is reported.

use std::{fs, io, path::Path};

use serde::Serialize;

use crate::core::sanitize::split_list;
use crate::error::LoadError;

/// Canonical tutor columns, also used for empty tables.
pub const TUTOR_HEADERS: [&str; 5] = ["tutor_id", "name", "expertise", "availability", "booking_link"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TutorRecord {
    pub id: String,
    pub name: String,
    pub expertise: Vec<String>,
    pub availability: String,
    pub booking_link: String,
}

impl TutorRecord {
    /// Focus area (lowercased) is a substring of some expertise tag.
    pub fn matches(&self, focus_area: &str) -> bool {
        let needle = focus_area.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.expertise.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorTable {
    pub headers: Vec<String>,
    pub tutors: Vec<TutorRecord>,
}

impl Default for TutorTable {
    fn default() -> Self { Self::empty() }
}

fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}').trim().to_lowercase().replace(' ', "_")
}

impl TutorTable {
    pub fn empty() -> Self {
        Self {
            headers: TUTOR_HEADERS.iter().map(|h| s!(*h)).collect(),
            tutors: Vec::new(),
        }
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();
        let pos = |name: &str| headers.iter().position(|h| h == name);
        let [id_ix, name_ix, exp_ix, avail_ix, link_ix] = TUTOR_HEADERS.map(pos);

        let mut tutors = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let cell = |ix: Option<usize>| {
                ix.and_then(|i| rec.get(i)).map(str::trim).unwrap_or("").to_string()
            };

            let name = cell(name_ix);
            if name.is_empty() {
                continue;
            }
            tutors.push(TutorRecord {
                id: cell(id_ix),
                name,
                expertise: split_list(&cell(exp_ix)),
                availability: cell(avail_ix),
                booking_link: cell(link_ix),
            });
        }

        Ok(Self { headers, tutors })
    }

    /// Tutors for `focus_area`, in source order.
    pub fn matching<'a>(&'a self, focus_area: &'a str) -> impl Iterator<Item = &'a TutorRecord> + 'a {
        self.tutors.iter().filter(move |t| t.matches(focus_area))
    }

    pub fn len(&self) -> usize { self.tutors.len() }
    pub fn is_empty(&self) -> bool { self.tutors.is_empty() }
}

pub fn load_tutors(path: &Path) -> Result<TutorTable, LoadError> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Tutors: {} not found, using empty table", path.display());
            return Ok(TutorTable::empty());
        }
        Err(e) => return Err(LoadError::io(path, e)),
    };
    let table = TutorTable::from_reader(io::BufReader::new(file))?;
    logf!("Tutors: {} loaded from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(tags: &[&str]) -> TutorRecord {
        TutorRecord {
            name: s!("Ada"),
            expertise: tags.iter().map(|t| s!(*t)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn focus_is_substring_of_a_tag() {
        let t = tutor(&["Data Analysis", "SQL"]);
        assert!(t.matches("data"));
        assert!(t.matches("Data Analysis"));
        assert!(t.matches("sql"));
        assert!(!t.matches("Machine Learning"));
        assert!(!t.matches(""));
    }

    #[test]
    fn tag_substring_of_focus_is_not_a_match() {
        let t = tutor(&["SQL"]);
        assert!(!t.matches("SQL and databases"));
    }

    #[test]
    fn headers_are_case_and_space_insensitive() {
        let csv = " Tutor ID ,Name,Expertise,Availability,Booking Link\n1,Ada,\"Data Analysis, SQL\",Mon,https://x\n2,,Python,Tue,\n";
        let table = TutorTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        let t = &table.tutors[0];
        assert_eq!(t.id, "1");
        assert_eq!(t.expertise, vec!["Data Analysis", "SQL"]);
        assert_eq!(t.booking_link, "https://x");
    }

    #[test]
    fn empty_table_has_headers() {
        let t = TutorTable::empty();
        assert!(t.is_empty());
        assert_eq!(t.headers, TUTOR_HEADERS);
    }
}
