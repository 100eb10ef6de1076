//! Cached access to the unified table for request-driven consumers.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;

use nutri_model::UnifiedTable;

use crate::reader::read_unified;

/// Loads the unified table once and serves the cached copy afterwards.
///
/// A rebuild of the artifact requires a new store; there is no invalidation,
/// matching the batch lifecycle of the pipeline.
#[derive(Debug)]
pub struct UnifiedStore {
    path: PathBuf,
    table: OnceLock<UnifiedTable>,
}

impl UnifiedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    /// The unified table, loaded on first call.
    pub fn table(&self) -> Result<&UnifiedTable> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let loaded = read_unified(&self.path)?;
        Ok(self.table.get_or_init(|| loaded))
    }
}
