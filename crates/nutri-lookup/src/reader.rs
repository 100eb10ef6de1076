//! Parses the unified CSV artifact back into typed rows.
//!
//! Every non-identity column is treated as optionally absent, so older
//! artifacts with fewer columns still load.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use nutri_ingest::parse_f64;
use nutri_model::{Condition, Nutrient, Suitability, UnifiedRow, UnifiedTable};

/// Loads the unified table. A missing artifact yields an empty table.
pub fn read_unified(path: &Path) -> Result<UnifiedTable> {
    if !path.exists() {
        return Ok(UnifiedTable::default());
    }
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read unified table: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let name_col = column("food_name");
    let key_col = column("food_name_normalized");
    let sources_col = column("source_datasets");
    let nutrient_cols: Vec<(Nutrient, Option<usize>)> = Nutrient::ALL
        .into_iter()
        .map(|n| (n, column(n.code())))
        .collect();
    let condition_cols: Vec<(Condition, Option<usize>)> = Condition::ALL
        .into_iter()
        .map(|c| (c, column(c.code())))
        .collect();
    let diet_col = column("diet_type");
    let notes_col = column("recommendation_notes");

    let mut rows = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else {
            continue;
        };
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();
        let key = cell(key_col).to_string();
        if key.is_empty() {
            continue;
        }
        let mut row = UnifiedRow {
            food_name: cell(name_col).to_string(),
            key,
            sources: cell(sources_col)
                .split(';')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            nutrients: Default::default(),
            flags: Default::default(),
            diet_type: non_empty(cell(diet_col)),
            recommendation_notes: non_empty(cell(notes_col)),
        };
        for (nutrient, idx) in &nutrient_cols {
            if let Some(value) = parse_f64(cell(*idx)) {
                row.nutrients.insert(*nutrient, value);
            }
        }
        for (condition, idx) in &condition_cols {
            let flag = Suitability::from_csv_literal(cell(*idx));
            if flag.is_known() {
                row.flags.insert(*condition, flag);
            }
        }
        rows.push(row);
    }
    Ok(UnifiedTable { rows })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
