//! Common contract for source processors.

use anyhow::Result;
use tracing::info;

use nutri_ingest::CsvTable;
use nutri_model::{CleanedRow, CleanedTable};

use crate::normalize::{find_column_index, normalize_food_name};

/// One dataset family: loads its raw file(s) and emits cleaned rows with the
/// canonical schema.
///
/// Absence of a source file is a normal state, not an error: `load` yields an
/// empty table and `run` passes it through.
pub trait SourceProcessor {
    /// Provenance tag recorded in `source_datasets`.
    fn source_tag(&self) -> &'static str;

    /// Reads the raw table, trying candidate paths in order. Empty when no
    /// file exists.
    fn load(&self) -> Result<CsvTable>;

    /// Resolves columns, maps values into canonical space, computes the
    /// normalization key, and drops rows without a usable name.
    fn clean(&self, table: &CsvTable) -> CleanedTable;

    fn run(&self) -> Result<CleanedTable> {
        let raw = self.load()?;
        if raw.is_empty() {
            return Ok(CleanedTable::new(self.source_tag()));
        }
        let cleaned = self.clean(&raw);
        info!(
            source = self.source_tag(),
            raw_rows = raw.rows.len(),
            cleaned_rows = cleaned.rows.len(),
            "cleaned source"
        );
        Ok(cleaned)
    }
}

/// Resolves the food-name column, falling back to the first column when no
/// candidate matches. The fallback is a deliberate best-effort policy.
pub fn resolve_name_column(table: &CsvTable, candidates: &[&str]) -> Option<usize> {
    if table.headers.is_empty() {
        return None;
    }
    Some(find_column_index(candidates, &table.headers).unwrap_or(0))
}

/// Builds a cleaned row skeleton for one raw row, or `None` when the name is
/// missing or blank after trimming.
pub fn named_row(table: &CsvTable, row: usize, name_column: usize) -> Option<CleanedRow> {
    let display = table.get(row, name_column).trim();
    if display.is_empty() {
        return None;
    }
    let key = normalize_food_name(display);
    if key.is_empty() {
        return None;
    }
    Some(CleanedRow::new(display, key))
}

/// Optional free-text cell: `None` when blank.
pub fn text_cell(table: &CsvTable, row: usize, column: usize) -> Option<String> {
    let value = table.get(row, column).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
