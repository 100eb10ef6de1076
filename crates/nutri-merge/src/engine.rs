//! Multi-source merge: outer join on the normalization key with
//! first-non-missing coalescing.
//!
//! Priority is strictly the input order of the cleaned tables. Callers
//! configure reliability by ordering sources, not by per-row heuristics; there
//! is no averaging and no recency weighting.

use std::collections::BTreeMap;

use tracing::info;

use nutri_model::{CleanedRow, CleanedTable, UnifiedRow, UnifiedTable};

/// Folds cleaned tables into one unified table.
///
/// Tables with zero rows are skipped entirely rather than contributing an
/// all-missing row per key. Zero contributing tables yield an empty table,
/// never an error. Row order is first-seen order across the fold, which keeps
/// reruns deterministic and defines "table order" for lookup consumers.
pub fn merge(tables: &[CleanedTable]) -> UnifiedTable {
    let mut rows: Vec<UnifiedRow> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    for table in tables {
        if table.is_empty() {
            continue;
        }
        for cleaned in &table.rows {
            match index.get(&cleaned.key) {
                Some(&at) => fold_into(&mut rows[at], cleaned, &table.source_tag),
                None => {
                    index.insert(cleaned.key.clone(), rows.len());
                    rows.push(start_row(cleaned, &table.source_tag));
                }
            }
        }
    }
    info!(
        sources = tables.iter().filter(|t| !t.is_empty()).count(),
        unified_rows = rows.len(),
        "merged cleaned tables"
    );
    UnifiedTable { rows }
}

fn start_row(cleaned: &CleanedRow, source_tag: &str) -> UnifiedRow {
    let mut row = UnifiedRow {
        food_name: cleaned.food_name.clone(),
        key: cleaned.key.clone(),
        sources: Vec::new(),
        nutrients: cleaned.nutrients.clone(),
        flags: cleaned.flags.clone(),
        diet_type: cleaned.diet_type.clone(),
        recommendation_notes: cleaned.recommendation_notes.clone(),
    };
    push_source(&mut row, source_tag);
    row
}

/// Coalesces one cleaned row into an existing unified row: the value already
/// present wins, the incoming value only fills gaps.
fn fold_into(row: &mut UnifiedRow, cleaned: &CleanedRow, source_tag: &str) {
    if row.food_name.is_empty() {
        row.food_name = cleaned.food_name.clone();
    }
    for (nutrient, value) in &cleaned.nutrients {
        row.nutrients.entry(*nutrient).or_insert(*value);
    }
    for (condition, flag) in &cleaned.flags {
        row.flags.entry(*condition).or_insert(*flag);
    }
    if row.diet_type.is_none() {
        row.diet_type = cleaned.diet_type.clone();
    }
    if row.recommendation_notes.is_none() {
        row.recommendation_notes = cleaned.recommendation_notes.clone();
    }
    push_source(row, source_tag);
}

fn push_source(row: &mut UnifiedRow, source_tag: &str) {
    if source_tag.is_empty() {
        return;
    }
    if !row.sources.iter().any(|tag| tag == source_tag) {
        row.sources.push(source_tag.to_string());
    }
}
