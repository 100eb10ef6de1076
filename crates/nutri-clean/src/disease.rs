//! Disease-suitability dataset processor.

use anyhow::Result;

use nutri_ingest::{CsvTable, load_first_existing};
use nutri_model::{CleanedTable, Condition, PipelineConfig};

use crate::normalize::find_column_index;
use crate::processor::{SourceProcessor, named_row, resolve_name_column};
use crate::suitability::parse_suitability;

const NAME_CANDIDATES: &[&str] = &["Food", "food", "food_name", "item", "name", "Food Item"];

const CONDITION_CANDIDATES: &[(Condition, &[&str])] = &[
    (
        Condition::Diabetes,
        &[
            "Diabetes",
            "diabetes_safe",
            "suitable_diabetes",
            "Good for Diabetes",
            "diabetes",
        ],
    ),
    (
        Condition::BloodPressure,
        &[
            "Blood pressure",
            "bp_safe",
            "suitable_bp",
            "suitable_blood_pressure",
            "Blood Pressure",
            "hypertension",
        ],
    ),
    (
        Condition::Heart,
        &[
            "Heart",
            "heart_safe",
            "suitable_heart",
            "Heart Disease",
            "heart",
        ],
    ),
];

#[derive(Debug, Clone)]
pub struct DiseaseProcessor {
    config: PipelineConfig,
}

impl DiseaseProcessor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SourceProcessor for DiseaseProcessor {
    fn source_tag(&self) -> &'static str {
        "disease"
    }

    fn load(&self) -> Result<CsvTable> {
        Ok(load_first_existing(&self.config.disease.candidates)?
            .map(|(_, table)| table)
            .unwrap_or_default())
    }

    fn clean(&self, table: &CsvTable) -> CleanedTable {
        let mut cleaned = CleanedTable::new(self.source_tag());
        let Some(name_col) = resolve_name_column(table, NAME_CANDIDATES) else {
            return cleaned;
        };
        let condition_columns: Vec<(Condition, Option<usize>)> = CONDITION_CANDIDATES
            .iter()
            .map(|(condition, candidates)| {
                (*condition, find_column_index(candidates, &table.headers))
            })
            .collect();
        for row in 0..table.rows.len() {
            let Some(mut record) = named_row(table, row, name_col) else {
                continue;
            };
            for (condition, column) in &condition_columns {
                let Some(column) = column else {
                    // Missing column means the source said nothing, never a default.
                    continue;
                };
                let flag = parse_suitability(table.get(row, *column));
                if flag.is_known() {
                    record.flags.insert(*condition, flag);
                }
            }
            cleaned.rows.push(record);
        }
        cleaned
    }
}
