// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::core::duration::DurationHeuristics;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub export: ExportOptions,
    pub durations: DurationHeuristics,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub catalogue: PathBuf,
    /// Optional; a missing file just means no tutors.
    pub tutors: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            catalogue: PathBuf::from(DEFAULT_CATALOGUE_FILE),
            tutors: PathBuf::from(DEFAULT_TUTORS_FILE),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delimiter(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Tsv => "TSV" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows `format`.
    pub fn out_path(&self) -> PathBuf {
        let file_name = join!(&self.out_path.file_stem, ".", self.format.ext());
        self.out_path.dir.join(file_name)
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension;
    /// format controls it. A trailing separator means "directory, keep stem".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = Path::new(s);

        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        if let Some(parent) = p.parent() {
            self.out_path.dir = if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            };
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: default_file_stem(Local::now().date_naive()),
        }
    }
}

/// `courses_export_YYYYMMDD`
pub fn default_file_stem(date: NaiveDate) -> String {
    join!(EXPORT_FILE_PREFIX, &date.format("%Y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_uses_compact_date() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(default_file_stem(d), "courses_export_20260309");
    }

    #[test]
    fn extension_follows_format() {
        let mut opts = ExportOptions::default();
        opts.set_path("out/picked.txt");
        assert!(opts.out_path().ends_with("picked.csv"));
        opts.format = ExportFormat::Tsv;
        assert!(opts.out_path().ends_with("picked.tsv"));
    }

    #[test]
    fn trailing_separator_keeps_stem() {
        let mut opts = ExportOptions::default();
        opts.set_path("other/picked.csv");
        opts.set_path("elsewhere/");
        assert_eq!(opts.out_path(), PathBuf::from("elsewhere").join("picked.csv"));
    }

    #[test]
    fn bare_file_name_lands_in_cwd() {
        let mut opts = ExportOptions::default();
        opts.set_path("mine");
        assert_eq!(opts.out_path(), PathBuf::from(".").join("mine.csv"));
    }
}
