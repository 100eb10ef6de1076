//! Lookup by free-text name, plus row projections for API consumers.

use std::collections::BTreeMap;

use nutri_clean::normalize_food_name;
use nutri_model::{Condition, Nutrient, UnifiedRow, UnifiedTable};

/// Finds a row for an arbitrary free-text name.
///
/// Three progressively looser tiers: exact match on the normalization key,
/// substring containment against normalized keys, then substring containment
/// against lower-cased display names. Returns the first match in table order,
/// not the best match; that simplicity-over-precision tradeoff is part of the
/// contract consumers rely on.
pub fn lookup<'a>(name: &str, table: &'a UnifiedTable) -> Option<&'a UnifiedRow> {
    let key = normalize_food_name(name);
    if key.is_empty() {
        return None;
    }
    if let Some(row) = table.rows.iter().find(|row| row.key == key) {
        return Some(row);
    }
    if let Some(row) = table.rows.iter().find(|row| row.key.contains(&key)) {
        return Some(row);
    }
    table
        .rows
        .iter()
        .find(|row| row.food_name.to_lowercase().contains(&key))
}

/// Nutrient fields with a present numeric value, keyed by column name.
pub fn nutrient_summary(row: &UnifiedRow) -> BTreeMap<&'static str, f64> {
    let mut summary = BTreeMap::new();
    for nutrient in Nutrient::ALL {
        if let Some(value) = row.nutrients.get(&nutrient) {
            summary.insert(nutrient.code(), *value);
        }
    }
    summary
}

/// Suitability flags keyed by column name; -1 means "unknown / not predicted
/// yet" and signals the API layer to fall back to a trained classifier.
pub fn disease_flags(row: &UnifiedRow) -> BTreeMap<&'static str, i8> {
    let mut flags = BTreeMap::new();
    for condition in Condition::ALL {
        flags.insert(condition.code(), row.flag(condition).as_flag());
    }
    flags
}
