//! Training-side view of the unified table.
//!
//! Classifiers cannot consume missing values, so nutrients are zero-filled
//! here. This is deliberately a different missing-value policy than the
//! lookup path, which must keep "unknown" distinct from "zero".

use nutri_model::{Condition, Nutrient, UnifiedTable};

/// Dense nutrient features per food, missing values filled with 0.
#[derive(Debug, Clone, Default)]
pub struct FeatureMatrix {
    /// Display name per row, aligned with `features`.
    pub names: Vec<String>,
    /// One row per food, fourteen nutrient values in canonical order.
    pub features: Vec<[f64; 14]>,
}

pub fn feature_matrix(table: &UnifiedTable) -> FeatureMatrix {
    let mut matrix = FeatureMatrix::default();
    for row in &table.rows {
        let mut features = [0.0; 14];
        for (idx, nutrient) in Nutrient::ALL.into_iter().enumerate() {
            features[idx] = row.nutrients.get(&nutrient).copied().unwrap_or(0.0);
        }
        matrix.names.push(row.food_name.clone());
        matrix.features.push(features);
    }
    matrix
}

/// Labelled rows for one condition: `(row index, label)` where label is 1 for
/// suitable and 0 for unsuitable. Rows with an unknown flag are excluded, not
/// zero-filled.
pub fn condition_targets(table: &UnifiedTable, condition: Condition) -> Vec<(usize, u8)> {
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let flag = row.flag(condition);
            flag.is_known().then(|| (idx, flag.as_flag() as u8))
        })
        .collect()
}
