//! Meal-log dataset processor.
//!
//! Column names in these exports vary wildly, so resolution happens in two
//! passes: per-field candidate lists first, then the generic alias map for
//! anything still unbound.

use anyhow::Result;

use nutri_ingest::{CsvTable, load_first_existing};
use nutri_model::{CleanedTable, Nutrient, PipelineConfig};

use crate::alias_map::{NutrientColumns, map_nutrient_columns};
use crate::normalize::find_column_index;
use crate::processor::{SourceProcessor, named_row, resolve_name_column};

const NAME_CANDIDATES: &[&str] = &[
    "Food",
    "food",
    "food_name",
    "meal",
    "item",
    "name",
    "description",
];

/// Candidate headers per canonical field, highest priority first.
const FIELD_CANDIDATES: &[(Nutrient, &[&str])] = &[
    (
        Nutrient::EnergyKcal,
        &["Calories", "calories", "Energy", "energy_kcal", "kcal"],
    ),
    (
        Nutrient::ProteinG,
        &["Protein (g)", "Protein", "protein", "protein_g"],
    ),
    (
        Nutrient::TotalFatG,
        &["Total Fat (g)", "Fat (g)", "Fat", "fat", "total_fat_g"],
    ),
    (
        Nutrient::CarbohydratesG,
        &[
            "Carbohydrates (g)",
            "Carbs (g)",
            "Carbs",
            "carbohydrates_g",
            "Carbohydrate",
        ],
    ),
    (Nutrient::FiberG, &["Fiber (g)", "Fiber", "fiber_g"]),
    (Nutrient::SugarsG, &["Sugars (g)", "Sugars", "sugars_g"]),
    (Nutrient::SodiumMg, &["Sodium (mg)", "Sodium", "sodium_mg"]),
];

#[derive(Debug, Clone)]
pub struct MealsProcessor {
    config: PipelineConfig,
}

impl MealsProcessor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SourceProcessor for MealsProcessor {
    fn source_tag(&self) -> &'static str {
        "meals"
    }

    fn load(&self) -> Result<CsvTable> {
        Ok(load_first_existing(&self.config.meals.candidates)?
            .map(|(_, table)| table)
            .unwrap_or_default())
    }

    fn clean(&self, table: &CsvTable) -> CleanedTable {
        let mut cleaned = CleanedTable::new(self.source_tag());
        let Some(name_col) = resolve_name_column(table, NAME_CANDIDATES) else {
            return cleaned;
        };
        // Per-field candidates win over the generic alias map.
        let mut nutrients = NutrientColumns::default();
        for (nutrient, candidates) in FIELD_CANDIDATES {
            if let Some(idx) = find_column_index(candidates, &table.headers) {
                nutrients.bind(*nutrient, idx, 1.0);
            }
        }
        nutrients.fill_from(&map_nutrient_columns(table));
        for row in 0..table.rows.len() {
            let Some(mut record) = named_row(table, row, name_col) else {
                continue;
            };
            record.nutrients = nutrients.row_values(table, row);
            cleaned.rows.push(record);
        }
        cleaned
    }
}
