//! Unified-table persistence.
//!
//! The artifact is a whole-file replace: rows are written to a temporary
//! sibling path and renamed over the target, so concurrent readers see either
//! the old table or the new one, never a partial write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use nutri_ingest::format_numeric;
use nutri_model::{Condition, Nutrient, UnifiedTable, unified_columns};

/// Writes the unified table as CSV with the fixed canonical header order.
///
/// Missing values serialize as empty fields, never as zero. An empty table
/// still gets its header row.
pub fn write_unified(path: &Path, table: &UnifiedTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("csv.tmp");
    {
        let mut writer = WriterBuilder::new()
            .from_path(&tmp_path)
            .with_context(|| format!("write unified table: {}", tmp_path.display()))?;
        writer
            .write_record(unified_columns())
            .context("write header")?;
        for row in &table.rows {
            let mut record: Vec<String> = Vec::with_capacity(unified_columns().len());
            record.push(row.food_name.clone());
            record.push(row.key.clone());
            record.push(row.source_datasets());
            for nutrient in Nutrient::ALL {
                let cell = row
                    .nutrients
                    .get(&nutrient)
                    .map(|v| format_numeric(*v))
                    .unwrap_or_default();
                record.push(cell);
            }
            for condition in Condition::ALL {
                record.push(row.flag(condition).csv_literal().to_string());
            }
            record.push(row.diet_type.clone().unwrap_or_default());
            record.push(row.recommendation_notes.clone().unwrap_or_default());
            writer.write_record(&record).context("write row")?;
        }
        writer.flush().context("flush unified table")?;
    }
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace unified table: {}", path.display()))?;
    info!(path = %path.display(), rows = table.rows.len(), "wrote unified table");
    Ok(())
}
