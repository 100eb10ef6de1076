//! Record types flowing through the unification pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nutrient::Nutrient;
use crate::suitability::{Condition, Suitability};

/// One cleaned row emitted by a source processor.
///
/// `key` is never empty for a retained row; rows without a usable name are
/// dropped during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRow {
    /// Display name with the source's original casing.
    pub food_name: String,
    /// Normalization key used for joining across sources.
    pub key: String,
    /// Canonical nutrient values, already in standard units.
    pub nutrients: BTreeMap<Nutrient, f64>,
    /// Suitability per condition; absent means the source said nothing.
    pub flags: BTreeMap<Condition, Suitability>,
    pub diet_type: Option<String>,
    pub recommendation_notes: Option<String>,
}

impl CleanedRow {
    pub fn new(food_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            key: key.into(),
            nutrients: BTreeMap::new(),
            flags: BTreeMap::new(),
            diet_type: None,
            recommendation_notes: None,
        }
    }
}

/// Output of one source processor: cleaned rows plus the provenance tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanedTable {
    pub source_tag: String,
    pub rows: Vec<CleanedRow>,
}

impl CleanedTable {
    pub fn new(source_tag: impl Into<String>) -> Self {
        Self {
            source_tag: source_tag.into(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of the unified table: a single food reconciled across sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedRow {
    pub food_name: String,
    pub key: String,
    /// Every source tag that contributed, in fold order.
    pub sources: Vec<String>,
    pub nutrients: BTreeMap<Nutrient, f64>,
    pub flags: BTreeMap<Condition, Suitability>,
    pub diet_type: Option<String>,
    pub recommendation_notes: Option<String>,
}

impl UnifiedRow {
    /// Suitability for a condition, `Unknown` when no source contributed one.
    pub fn flag(&self, condition: Condition) -> Suitability {
        self.flags
            .get(&condition)
            .copied()
            .unwrap_or(Suitability::Unknown)
    }

    /// Provenance tags joined with `;`, empty segments stripped.
    pub fn source_datasets(&self) -> String {
        let parts: Vec<&str> = self
            .sources
            .iter()
            .map(String::as_str)
            .filter(|tag| !tag.is_empty())
            .collect();
        parts.join(";")
    }
}

/// The persisted artifact: one row per distinct normalization key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnifiedTable {
    pub rows: Vec<UnifiedRow>,
}

impl UnifiedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Header order of the unified CSV, fixed across runs.
pub fn unified_columns() -> Vec<&'static str> {
    let mut columns = vec!["food_name", "food_name_normalized", "source_datasets"];
    columns.extend(Nutrient::ALL.iter().map(|n| n.code()));
    columns.extend(Condition::ALL.iter().map(|c| c.code()));
    columns.push("diet_type");
    columns.push("recommendation_notes");
    columns
}
