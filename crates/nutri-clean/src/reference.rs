//! Reference nutrient database processor.
//!
//! Two physical layouts are supported:
//! 1. A single wide file (`food_nutrients.csv`), one row per food. Preferred.
//! 2. A relational three-file layout (foods, nutrient amounts, nutrient
//!    definitions) that is pivoted long-to-wide over the fixed nutrient-ID
//!    table before the common clean step.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use nutri_ingest::{
    CsvTable, format_numeric, load_first_existing, load_optional, parse_f64, read_csv_table,
};
use nutri_model::{CleanedTable, Nutrient, PipelineConfig, nutrient_for_id};

use crate::alias_map::map_nutrient_columns;
use crate::normalize::find_column_index;
use crate::processor::{SourceProcessor, named_row, resolve_name_column};

const NAME_CANDIDATES: &[&str] = &["description", "long_description", "food_name", "name"];
const FOOD_ID_CANDIDATES: &[&str] = &["fdc_id", "food_id", "id"];
const AMOUNT_FOOD_ID_CANDIDATES: &[&str] = &["fdc_id", "food_id"];
const AMOUNT_NUTRIENT_ID_CANDIDATES: &[&str] = &["nutrient_id"];
const AMOUNT_VALUE_CANDIDATES: &[&str] = &["amount", "value"];

#[derive(Debug, Clone)]
pub struct ReferenceProcessor {
    config: PipelineConfig,
}

impl ReferenceProcessor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Pivots the relational layout into a wide table keyed by food.
    ///
    /// The first amount seen per (food, nutrient) pair wins. Nutrient IDs
    /// outside the fixed ID table are ignored.
    fn pivot_relational(&self, food: &CsvTable) -> Result<CsvTable> {
        let amounts = read_csv_table(&self.config.reference_nutrient_amount_file)?;
        let Some(food_id_col) = find_column_index(AMOUNT_FOOD_ID_CANDIDATES, &amounts.headers)
        else {
            debug!("nutrient amount file lacks a food id column; keeping foods only");
            return Ok(food.clone());
        };
        let Some(nutrient_id_col) =
            find_column_index(AMOUNT_NUTRIENT_ID_CANDIDATES, &amounts.headers)
        else {
            debug!("nutrient amount file lacks a nutrient id column; keeping foods only");
            return Ok(food.clone());
        };
        let Some(value_col) = find_column_index(AMOUNT_VALUE_CANDIDATES, &amounts.headers) else {
            debug!("nutrient amount file lacks an amount column; keeping foods only");
            return Ok(food.clone());
        };

        let mut per_food: BTreeMap<String, BTreeMap<Nutrient, f64>> = BTreeMap::new();
        for row in 0..amounts.rows.len() {
            let Ok(nutrient_id) = amounts.get(row, nutrient_id_col).parse::<u32>() else {
                continue;
            };
            let Some(nutrient) = nutrient_for_id(nutrient_id) else {
                continue;
            };
            let Some(amount) = parse_f64(amounts.get(row, value_col)) else {
                continue;
            };
            let food_id = amounts.get(row, food_id_col).trim().to_string();
            if food_id.is_empty() {
                continue;
            }
            per_food
                .entry(food_id)
                .or_default()
                .entry(nutrient)
                .or_insert(amount);
        }

        let id_col = find_column_index(FOOD_ID_CANDIDATES, &food.headers).unwrap_or(0);
        let name_col = find_column_index(NAME_CANDIDATES, &food.headers)
            .unwrap_or(if id_col == 0 && food.headers.len() > 1 { 1 } else { 0 });

        let mut headers = vec!["description".to_string()];
        headers.extend(Nutrient::ALL.iter().map(|n| n.code().to_string()));
        let mut rows = Vec::with_capacity(food.rows.len());
        for row in 0..food.rows.len() {
            let food_id = food.get(row, id_col).trim();
            let nutrients = per_food.get(food_id);
            let mut record = Vec::with_capacity(headers.len());
            record.push(food.get(row, name_col).to_string());
            for nutrient in Nutrient::ALL {
                let cell = nutrients
                    .and_then(|values| values.get(&nutrient))
                    .map(|v| format_numeric(*v))
                    .unwrap_or_default();
                record.push(cell);
            }
            rows.push(record);
        }
        Ok(CsvTable { headers, rows })
    }
}

impl SourceProcessor for ReferenceProcessor {
    fn source_tag(&self) -> &'static str {
        "usda"
    }

    fn load(&self) -> Result<CsvTable> {
        // Single wide file takes priority when both layouts are present.
        if let Some((path, table)) = load_first_existing(&self.config.reference_single.candidates)?
        {
            debug!(path = %path.display(), "loaded single-file reference layout");
            return Ok(table);
        }
        let food = load_optional(&self.config.reference_food_file)?;
        if food.headers.is_empty() {
            return Ok(CsvTable::default());
        }
        if self.config.reference_nutrient_amount_file.exists()
            && self.config.reference_nutrient_def_file.exists()
        {
            return self.pivot_relational(&food);
        }
        Ok(food)
    }

    fn clean(&self, table: &CsvTable) -> CleanedTable {
        let mut cleaned = CleanedTable::new(self.source_tag());
        let Some(name_col) = resolve_name_column(table, NAME_CANDIDATES) else {
            return cleaned;
        };
        let nutrients = map_nutrient_columns(table);
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
