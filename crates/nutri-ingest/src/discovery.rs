//! Candidate-path fallback for optional source files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::csv_table::{CsvTable, read_csv_table};

/// Loads the first candidate path that exists, in order.
///
/// A deployment may have some sources and not others, so no candidate
/// existing is a normal state and yields `None`, never an error. A file that
/// exists but cannot be read is an environment problem and does error.
pub fn load_first_existing(candidates: &[PathBuf]) -> Result<Option<(PathBuf, CsvTable)>> {
    for candidate in candidates {
        if candidate.exists() {
            let table = read_csv_table(candidate)?;
            return Ok(Some((candidate.clone(), table)));
        }
        debug!(path = %candidate.display(), "source candidate absent");
    }
    Ok(None)
}

/// Loads a single optional file: empty table when absent.
pub fn load_optional(path: &Path) -> Result<CsvTable> {
    if !path.exists() {
        debug!(path = %path.display(), "optional source absent");
        return Ok(CsvTable::default());
    }
    read_csv_table(path)
}
