//! Alias/unit mapping from raw table headers to canonical nutrient fields.

use std::collections::BTreeMap;

use nutri_ingest::{CsvTable, parse_f64};
use nutri_model::{Nutrient, alias_for};

/// Resolved source columns for canonical nutrient fields.
///
/// Maps each nutrient to the source column index it is populated from, plus
/// the scale factor to the standard unit.
#[derive(Debug, Clone, Default)]
pub struct NutrientColumns {
    columns: BTreeMap<Nutrient, (usize, f64)>,
}

impl NutrientColumns {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.columns.contains_key(&nutrient)
    }

    /// Inserts a binding unless the nutrient is already mapped.
    ///
    /// Once a canonical field is populated from one alias it is never
    /// overwritten by a later, lower-priority alias in the same pass.
    pub fn bind(&mut self, nutrient: Nutrient, column: usize, scale: f64) {
        self.columns.entry(nutrient).or_insert((column, scale));
    }

    /// Column index and scale bound to a nutrient, if any.
    pub fn binding(&self, nutrient: Nutrient) -> Option<(usize, f64)> {
        self.columns.get(&nutrient).copied()
    }

    /// Adopts bindings from `other` for nutrients not yet bound here.
    pub fn fill_from(&mut self, other: &NutrientColumns) {
        for (nutrient, (column, scale)) in &other.columns {
            self.columns.entry(*nutrient).or_insert((*column, *scale));
        }
    }

    /// Value of a nutrient for one row, scaled into the standard unit.
    pub fn value(&self, table: &CsvTable, row: usize, nutrient: Nutrient) -> Option<f64> {
        let (column, scale) = self.columns.get(&nutrient)?;
        parse_f64(table.get(row, *column)).map(|v| v * scale)
    }

    /// All values of one row, in canonical field order.
    pub fn row_values(&self, table: &CsvTable, row: usize) -> BTreeMap<Nutrient, f64> {
        let mut values = BTreeMap::new();
        for nutrient in Nutrient::ALL {
            if let Some(value) = self.value(table, row, nutrient) {
                values.insert(nutrient, value);
            }
        }
        values
    }
}

/// Resolves every table header against the static alias table.
///
/// Headers are scanned left to right; the first alias that resolves a
/// nutrient wins. Non-aliased columns are simply not bound.
pub fn map_nutrient_columns(table: &CsvTable) -> NutrientColumns {
    let mut mapping = NutrientColumns::default();
    for (idx, header) in table.headers.iter().enumerate() {
        if let Some((nutrient, scale)) = alias_for(header) {
            mapping.bind(nutrient, idx, scale);
        }
    }
    mapping
}
