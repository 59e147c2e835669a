// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{detect_headers, parse_rows, to_export_string};
use crate::data::{self, ClueRecord};
use crate::error::{Result, ScrapeError};

/// Write all records to the single export file described by `export`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[ClueRecord]) -> Result<PathBuf> {
    let path = export.out_path();
    let rows: Vec<Vec<String>> = records.iter().map(ClueRecord::to_row).collect();
    let headers = export.include_headers.then(data::headers);
    write_rows(&path, headers.as_deref(), &rows, export.delim())?;
    Ok(path)
}

/// Ensure the parent dir exists, then create/truncate `path` with the given rows.
pub fn write_rows(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_export_string(headers, rows, sep);
    fs::write(path, contents)?;
    Ok(())
}

/// Read an export file back: header (if it is ours) and records.
pub fn read_export(path: &Path, sep: char) -> Result<(Option<Vec<String>>, Vec<ClueRecord>)> {
    let text = fs::read_to_string(path)?;
    let (headers, rows) = detect_headers(parse_rows(&text, sep));
    let records = rows
        .iter()
        .map(|r| ClueRecord::from_row(r))
        .collect::<Result<Vec<_>>>()?;
    Ok((headers, records))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}", dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
