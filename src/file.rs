// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::catalogue::NormalizedRecord;
use crate::config::options::ExportOptions;
use crate::data::CatalogueView;
use crate::error::ExportError;

/// Export columns, in output order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "title",
    "domain",
    "platform",
    "level",
    "format",
    "duration_hours",
    "lms_link",
    "short_description",
];

/// One export row. Missing values become empty cells.
pub fn export_row(r: &NormalizedRecord) -> [String; 8] {
    [
        r.title.clone(),
        r.domain.clone(),
        r.platform.clone(),
        r.level.clone(),
        r.format.clone(),
        r.duration_hours.map(|h| format!("{h:.1}")).unwrap_or_default(),
        r.lms_link.clone().unwrap_or_default(),
        r.short_description.clone(),
    ]
}

/// Write the visible rows, in view order, as CSV or TSV.
pub fn write_table<W: Write>(
    out: W,
    export: &ExportOptions,
    view: &CatalogueView<'_>,
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(export.format.delimiter())
        .from_writer(out);

    if export.include_headers {
        wtr.write_record(EXPORT_HEADERS)?;
    }
    for r in view.iter() {
        wtr.write_record(export_row(r))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same bytes as the file export, for the clipboard.
pub fn to_export_string(export: &ExportOptions, view: &CatalogueView<'_>) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_table(&mut buf, export, view)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a single export file at `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, view: &CatalogueView<'_>) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?; // truncate/overwrite
    write_table(std::io::BufWriter::new(file), export, view)?;
    logf!("Export: {} row(s) → {}", view.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
