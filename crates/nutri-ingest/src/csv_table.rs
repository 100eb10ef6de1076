//! Lenient CSV loading into an in-memory string table.
//!
//! Source files come from scraped and hand-edited datasets, so the reader is
//! deliberately forgiving: flexible record lengths, BOM stripping, malformed
//! records skipped instead of aborting the load.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A raw source table: headers plus string rows, no normalization applied.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header, matched exactly as it appears in the file.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell value by row and column index; empty string for short records.
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`CsvTable`].
///
/// The first row is taken as the header row. Records the csv parser rejects
/// are skipped; fully empty rows are dropped. Returns an error only when the
/// file itself cannot be opened or read.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for idx in 0..header_row.len() {
                    let value = record.get(idx).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                if row.iter().all(|value| value.is_empty()) {
                    continue;
                }
                rows.push(row);
            }
        }
    }
    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped malformed csv records");
    }
    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}
