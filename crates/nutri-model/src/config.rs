//! Pipeline configuration: dataset paths and source priority.
//!
//! Built once at process start and passed explicitly into processors; nothing
//! here is read from ambient global state, so processors stay independently
//! testable with injected paths.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Candidate file paths for one source family, tried in order.
#[derive(Debug, Clone, Serialize)]
pub struct SourcePaths {
    pub candidates: Vec<PathBuf>,
}

impl SourcePaths {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// First candidate that exists on disk.
    pub fn first_existing(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.exists())
    }
}

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    /// Single wide reference file, preferred over the relational layout.
    pub reference_single: SourcePaths,
    /// Relational reference layout: foods, nutrient amounts, nutrient definitions.
    pub reference_food_file: PathBuf,
    pub reference_nutrient_amount_file: PathBuf,
    pub reference_nutrient_def_file: PathBuf,
    pub meals: SourcePaths,
    pub disease: SourcePaths,
    pub diet: SourcePaths,
    pub output_path: PathBuf,
}

impl PipelineConfig {
    /// Standard layout under a datasets directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let reference_dir = data_dir.join("usda");
        let meals_dir = data_dir.join("meals");
        let disease_dir = data_dir.join("disease");
        let diet_dir = data_dir.join("diet_recommendation");
        Self {
            reference_single: SourcePaths::new(vec![reference_dir.join("food_nutrients.csv")]),
            reference_food_file: reference_dir.join("food.csv"),
            reference_nutrient_amount_file: reference_dir.join("food_nutrient.csv"),
            reference_nutrient_def_file: reference_dir.join("nutrient.csv"),
            meals: SourcePaths::new(vec![
                meals_dir.join("meals.csv"),
                meals_dir.join("daily_nutrition.csv"),
            ]),
            disease: SourcePaths::new(vec![
                disease_dir.join("food_disease.csv"),
                disease_dir.join("diabetes_blood_pressure_food.csv"),
            ]),
            diet: SourcePaths::new(vec![
                diet_dir.join("diet_recommendation.csv"),
                diet_dir.join("Diet_recommendation.csv"),
            ]),
            output_path: data_dir
                .join("processed")
                .join("unified_food_features.csv"),
            data_dir,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}
