// src/catalogue/mod.rs
//! Catalogue loading: source sheet → ordered, immutable [`NormalizedRecord`]s.

pub mod cache;
pub mod columns;
pub mod pipeline;
pub mod record;

use std::{fs, io, path::Path};

use crate::core::duration::DurationHeuristics;
use crate::error::LoadError;

pub use cache::CatalogueCache;
pub use columns::Field;
pub use record::{NormalizedRecord, RawRecord};

/// The loaded table. Record `id` equals its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    records: Vec<NormalizedRecord>,
}

impl Catalogue {
    pub fn from_reader<R: io::Read>(reader: R, h: &DurationHeuristics) -> Result<Self, LoadError> {
        Ok(Self { records: pipeline::run(reader, h)? })
    }

    pub fn records(&self) -> &[NormalizedRecord] { &self.records }
    pub fn get(&self, id: usize) -> Option<&NormalizedRecord> { self.records.get(id) }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

pub fn load_catalogue(path: &Path) -> Result<Catalogue, LoadError> {
    load_catalogue_with(path, &DurationHeuristics::default())
}

pub fn load_catalogue_with(path: &Path, h: &DurationHeuristics) -> Result<Catalogue, LoadError> {
    let file = fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
    let cat = Catalogue::from_reader(io::BufReader::new(file), h)?;
    logf!("Load: {} record(s) from {}", cat.len(), path.display());
    Ok(cat)
}
