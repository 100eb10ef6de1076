use std::fs;
use std::path::Path;

use nutri_clean::{
    DietProcessor, DiseaseProcessor, MealsProcessor, ReferenceProcessor, SourceProcessor,
    map_nutrient_columns, parse_suitability,
};
use nutri_ingest::CsvTable;
use nutri_model::{Condition, Nutrient, PipelineConfig, Suitability};

fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
    CsvTable {
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    }
}

fn empty_config() -> PipelineConfig {
    PipelineConfig::new("/nonexistent/datasets")
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).expect("create dir");
    fs::write(path, contents).expect("write file");
}

#[test]
fn alias_mapper_scales_kilojoules() {
    let raw = table(&["Name", "energy_kj"], &[&["Toast", "418.4"]]);
    let mapping = map_nutrient_columns(&raw);
    let value = mapping
        .value(&raw, 0, Nutrient::EnergyKcal)
        .expect("energy value");
    assert!((value - 418.4 * 0.239_006).abs() < 1e-6);
}

#[test]
fn alias_mapper_never_double_maps() {
    // Both headers alias energy; the leftmost must win and keep winning.
    let raw = table(&["calories", "energy"], &[&["100", "999"]]);
    let mapping = map_nutrient_columns(&raw);
    assert_eq!(mapping.value(&raw, 0, Nutrient::EnergyKcal), Some(100.0));
}

#[test]
fn suitability_coercion_table() {
    for raw in ["Yes", "1", "Good", "true", "safe", "2.5"] {
        assert_eq!(parse_suitability(raw), Suitability::Suitable, "{raw}");
    }
    for raw in ["No", "0", "Bad", "false", "avoid", "-1"] {
        assert_eq!(parse_suitability(raw), Suitability::Unsuitable, "{raw}");
    }
    for raw in ["maybe", "", "n/a?"] {
        assert_eq!(parse_suitability(raw), Suitability::Unknown, "{raw}");
    }
}

#[test]
fn disease_clean_maps_flags_and_drops_blank_names() {
    let processor = DiseaseProcessor::new(&empty_config());
    let raw = table(
        &["Food Item", "Diabetes", "Blood Pressure", "Heart"],
        &[
            &["Broccoli", "Yes", "1", "Good"],
            &["Candy", "No", "0", "Bad"],
            &["Mystery", "maybe", "", "???"],
            &["   ", "Yes", "Yes", "Yes"],
        ],
    );
    let cleaned = processor.clean(&raw);
    assert_eq!(cleaned.source_tag, "disease");
    assert_eq!(cleaned.rows.len(), 3);
    let broccoli = &cleaned.rows[0];
    assert_eq!(broccoli.key, "broccoli");
    assert_eq!(
        broccoli.flags.get(&Condition::Diabetes),
        Some(&Suitability::Suitable)
    );
    let candy = &cleaned.rows[1];
    assert_eq!(
        candy.flags.get(&Condition::Heart),
        Some(&Suitability::Unsuitable)
    );
    // Unparseable values stay unknown: no flag recorded, never a default.
    assert!(cleaned.rows[2].flags.is_empty());
}

#[test]
fn disease_clean_without_condition_columns_records_nothing() {
    let processor = DiseaseProcessor::new(&empty_config());
    let raw = table(&["Food", "Color"], &[&["Kale", "green"]]);
    let cleaned = processor.clean(&raw);
    assert_eq!(cleaned.rows.len(), 1);
    assert!(cleaned.rows[0].flags.is_empty());
}

#[test]
fn meals_clean_resolves_field_candidates_then_aliases() {
    let processor = MealsProcessor::new(&empty_config());
    let raw = table(
        &["Meal", "Calories", "Protein (g)", "potassium"],
        &[&["Oatmeal Bowl", "150", "5.2", "164"]],
    );
    let cleaned = processor.clean(&raw);
    assert_eq!(cleaned.rows.len(), 1);
    let row = &cleaned.rows[0];
    assert_eq!(row.food_name, "Oatmeal Bowl");
    assert_eq!(row.key, "oatmeal bowl");
    assert_eq!(row.nutrients.get(&Nutrient::EnergyKcal), Some(&150.0));
    assert_eq!(row.nutrients.get(&Nutrient::ProteinG), Some(&5.2));
    // Potassium has no per-field candidate list; the generic alias map fills it.
    assert_eq!(row.nutrients.get(&Nutrient::PotassiumMg), Some(&164.0));
    assert_eq!(row.nutrients.get(&Nutrient::FiberG), None);
}

#[test]
fn name_resolution_falls_back_to_first_column() {
    let processor = MealsProcessor::new(&empty_config());
    let raw = table(&["Dish Title", "Calories"], &[&["Pasta", "220"]]);
    let cleaned = processor.clean(&raw);
    assert_eq!(cleaned.rows.len(), 1);
    assert_eq!(cleaned.rows[0].food_name, "Pasta");
}

#[test]
fn diet_clean_extracts_free_text_fields() {
    let processor = DietProcessor::new(&empty_config());
    let raw = table(
        &["Food", "Diet", "Recommendation"],
        &[
            &["Lentils", "Vegetarian", "High protein staple"],
            &["Bacon", "", ""],
        ],
    );
    let cleaned = processor.clean(&raw);
    assert_eq!(cleaned.source_tag, "diet_recommendation");
    assert_eq!(
        cleaned.rows[0].diet_type.as_deref(),
        Some("Vegetarian")
    );
    assert_eq!(
        cleaned.rows[0].recommendation_notes.as_deref(),
        Some("High protein staple")
    );
    assert_eq!(cleaned.rows[1].diet_type, None);
    assert_eq!(cleaned.rows[1].recommendation_notes, None);
}

#[test]
fn absent_sources_run_to_empty_tables() {
    let config = empty_config();
    for processor in [
        Box::new(MealsProcessor::new(&config)) as Box<dyn SourceProcessor>,
        Box::new(DiseaseProcessor::new(&config)),
        Box::new(DietProcessor::new(&config)),
        Box::new(ReferenceProcessor::new(&config)),
    ] {
        let cleaned = processor.run().expect("absent source is not an error");
        assert!(cleaned.is_empty());
    }
}

#[test]
fn meals_load_falls_back_to_alternate_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(dir.path());
    write(
        &dir.path().join("meals/daily_nutrition.csv"),
        "Food,Calories\nToast,80\n",
    );
    let cleaned = MealsProcessor::new(&config).run().expect("run meals");
    assert_eq!(cleaned.rows.len(), 1);
    assert_eq!(cleaned.rows[0].food_name, "Toast");
}

#[test]
fn reference_prefers_single_file_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(dir.path());
    write(
        &dir.path().join("usda/food_nutrients.csv"),
        "description,Energy,Protein\nBroccoli,34,2.8\n",
    );
    // Relational files also present; the single file must take priority.
    write(&dir.path().join("usda/food.csv"), "fdc_id,description\n9,X\n");
    write(
        &dir.path().join("usda/food_nutrient.csv"),
        "fdc_id,nutrient_id,amount\n9,1008,999\n",
    );
    write(&dir.path().join("usda/nutrient.csv"), "id,name\n1008,Energy\n");
    let cleaned = ReferenceProcessor::new(&config).run().expect("run reference");
    assert_eq!(cleaned.rows.len(), 1);
    assert_eq!(cleaned.rows[0].food_name, "Broccoli");
    assert_eq!(
        cleaned.rows[0].nutrients.get(&Nutrient::EnergyKcal),
        Some(&34.0)
    );
}

#[test]
fn reference_pivots_relational_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(dir.path());
    write(
        &dir.path().join("usda/food.csv"),
        "fdc_id,description\n1,Broccoli, raw\n2,Cheddar Cheese\n",
    );
    write(
        &dir.path().join("usda/food_nutrient.csv"),
        "fdc_id,nutrient_id,amount\n\
         1,1008,34\n\
         1,1003,2.8\n\
         1,1008,999\n\
         2,1004,33.3\n\
         1,9999,5\n",
    );
    write(
        &dir.path().join("usda/nutrient.csv"),
        "id,name,unit_name\n1008,Energy,KCAL\n1003,Protein,G\n",
    );
    let cleaned = ReferenceProcessor::new(&config).run().expect("run reference");
    assert_eq!(cleaned.rows.len(), 2);
    let broccoli = &cleaned.rows[0];
    // First amount per (food, nutrient) wins; unknown nutrient ids are ignored.
    assert_eq!(broccoli.nutrients.get(&Nutrient::EnergyKcal), Some(&34.0));
    assert_eq!(broccoli.nutrients.get(&Nutrient::ProteinG), Some(&2.8));
    let cheddar = &cleaned.rows[1];
    assert_eq!(cheddar.food_name, "Cheddar Cheese");
    assert_eq!(cheddar.nutrients.get(&Nutrient::TotalFatG), Some(&33.3));
    assert_eq!(cheddar.nutrients.get(&Nutrient::EnergyKcal), None);
}
