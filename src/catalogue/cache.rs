// src/catalogue/cache.rs
//
// Memoized catalogue loads. An entry is reused only while both the path and
// the file's content fingerprint are unchanged; a failed load never touches
// the existing entry.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use sha2::{Digest, Sha256};

use super::Catalogue;
use crate::core::duration::DurationHeuristics;
use crate::error::LoadError;

#[derive(Debug)]
struct Entry {
    fingerprint: String,
    catalogue: Arc<Catalogue>,
}

#[derive(Debug, Default)]
pub struct CatalogueCache {
    heuristics: DurationHeuristics,
    entries: HashMap<PathBuf, Entry>,
}

impl CatalogueCache {
    pub fn new(heuristics: DurationHeuristics) -> Self {
        Self { heuristics, entries: HashMap::new() }
    }

    pub fn heuristics(&self) -> &DurationHeuristics { &self.heuristics }

    /// Heuristics feed every parsed duration, so a change drops all entries.
    pub fn set_heuristics(&mut self, h: DurationHeuristics) {
        if h != self.heuristics {
            logd!("Cache: heuristics changed, dropping {} entr(ies)", self.entries.len());
            self.heuristics = h;
            self.entries.clear();
        }
    }

    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Catalogue>, LoadError> {
        let bytes = fs::read(path).map_err(|e| LoadError::io(path, e))?;
        let fp = fingerprint(&bytes);

        if let Some(entry) = self.entries.get(path) {
            if entry.fingerprint == fp {
                logd!("Cache: hit {}", path.display());
                return Ok(Arc::clone(&entry.catalogue));
            }
            logf!("Cache: {} changed on disk, reloading", path.display());
        }

        let catalogue = Arc::new(Catalogue::from_reader(bytes.as_slice(), &self.heuristics)?);
        logf!("Cache: loaded {} record(s) from {}", catalogue.len(), path.display());
        self.entries.insert(
            path.to_path_buf(),
            Entry { fingerprint: fp, catalogue: Arc::clone(&catalogue) },
        );
        Ok(catalogue)
    }

    /// Returns true if an entry was dropped.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Hex SHA-256 of the raw file bytes.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_hex() {
        let a = fingerprint(b"Resource title\nIntro\n");
        assert_eq!(a.len(), 64);
        assert_eq!(a, fingerprint(b"Resource title\nIntro\n"));
        assert_ne!(a, fingerprint(b"Resource title\nOther\n"));
    }

    #[test]
    fn same_heuristics_keep_entries() {
        let mut cache = CatalogueCache::default();
        cache.set_heuristics(DurationHeuristics::default());
        assert!(cache.is_empty());
        assert_eq!(cache.heuristics(), &DurationHeuristics::default());
    }
}
