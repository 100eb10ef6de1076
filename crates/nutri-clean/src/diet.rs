//! Diet-recommendation dataset processor.

use anyhow::Result;

use nutri_ingest::{CsvTable, load_first_existing};
use nutri_model::{CleanedTable, PipelineConfig};

use crate::normalize::find_column_index;
use crate::processor::{SourceProcessor, named_row, resolve_name_column, text_cell};

const NAME_CANDIDATES: &[&str] = &["Food", "food", "food_name", "name", "Item"];
const DIET_TYPE_CANDIDATES: &[&str] = &["Diet", "diet_type", "Type", "Category", "Diet_type"];
const NOTES_CANDIDATES: &[&str] = &[
    "Recommendation",
    "recommendation",
    "recommendation_notes",
    "Notes",
    "description",
    "Veg_NonVeg",
];

#[derive(Debug, Clone)]
pub struct DietProcessor {
    config: PipelineConfig,
}

impl DietProcessor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SourceProcessor for DietProcessor {
    fn source_tag(&self) -> &'static str {
        "diet_recommendation"
    }

    fn load(&self) -> Result<CsvTable> {
        Ok(load_first_existing(&self.config.diet.candidates)?
            .map(|(_, table)| table)
            .unwrap_or_default())
    }

    fn clean(&self, table: &CsvTable) -> CleanedTable {
        let mut cleaned = CleanedTable::new(self.source_tag());
        let Some(name_col) = resolve_name_column(table, NAME_CANDIDATES) else {
            return cleaned;
        };
        let diet_col = find_column_index(DIET_TYPE_CANDIDATES, &table.headers);
        let notes_col = find_column_index(NOTES_CANDIDATES, &table.headers);
        for row in 0..table.rows.len() {
            let Some(mut record) = named_row(table, row, name_col) else {
                continue;
            };
            record.diet_type = diet_col.and_then(|col| text_cell(table, row, col));
            record.recommendation_notes = notes_col.and_then(|col| text_cell(table, row, col));
            cleaned.rows.push(record);
        }
        cleaned
    }
}
