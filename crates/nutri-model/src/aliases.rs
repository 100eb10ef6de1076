//! Alias and unit tables mapping source column names to canonical fields.
//!
//! Each entry is `(lower-cased alias, canonical nutrient, scale factor)`,
//! where `value_in_file * scale` yields the value in the standard unit.

use crate::nutrient::Nutrient;

/// kJ to kcal.
const KJ_TO_KCAL: f64 = 0.239_006;

pub const ALIAS_TABLE: &[(&str, Nutrient, f64)] = &[
    // Energy
    ("energy_kcal", Nutrient::EnergyKcal, 1.0),
    ("energy", Nutrient::EnergyKcal, 1.0),
    ("calories", Nutrient::EnergyKcal, 1.0),
    ("kcal", Nutrient::EnergyKcal, 1.0),
    ("energy_kj", Nutrient::EnergyKcal, KJ_TO_KCAL),
    // Protein
    ("protein_g", Nutrient::ProteinG, 1.0),
    ("protein", Nutrient::ProteinG, 1.0),
    // Fat
    ("total_fat_g", Nutrient::TotalFatG, 1.0),
    ("total lipid (fat)", Nutrient::TotalFatG, 1.0),
    ("fat", Nutrient::TotalFatG, 1.0),
    ("total_fat", Nutrient::TotalFatG, 1.0),
    ("saturated_fat_g", Nutrient::SaturatedFatG, 1.0),
    ("saturated fat", Nutrient::SaturatedFatG, 1.0),
    // Carbohydrates
    ("carbohydrates_g", Nutrient::CarbohydratesG, 1.0),
    ("carbohydrate", Nutrient::CarbohydratesG, 1.0),
    ("carbohydrates", Nutrient::CarbohydratesG, 1.0),
    ("carbs", Nutrient::CarbohydratesG, 1.0),
    ("fiber_g", Nutrient::FiberG, 1.0),
    ("fiber", Nutrient::FiberG, 1.0),
    ("sugars_g", Nutrient::SugarsG, 1.0),
    ("sugars", Nutrient::SugarsG, 1.0),
    ("sugars, total", Nutrient::SugarsG, 1.0),
    ("sugar", Nutrient::SugarsG, 1.0),
    // Minerals (mg)
    ("sodium_mg", Nutrient::SodiumMg, 1.0),
    ("sodium", Nutrient::SodiumMg, 1.0),
    ("na", Nutrient::SodiumMg, 1.0),
    ("potassium_mg", Nutrient::PotassiumMg, 1.0),
    ("potassium", Nutrient::PotassiumMg, 1.0),
    ("k", Nutrient::PotassiumMg, 1.0),
    ("calcium_mg", Nutrient::CalciumMg, 1.0),
    ("calcium", Nutrient::CalciumMg, 1.0),
    ("iron_mg", Nutrient::IronMg, 1.0),
    ("iron", Nutrient::IronMg, 1.0),
    // Vitamins
    ("vitamin_a_iu", Nutrient::VitaminAIu, 1.0),
    ("vitamin a", Nutrient::VitaminAIu, 1.0),
    ("vitamin_c_mg", Nutrient::VitaminCMg, 1.0),
    ("vitamin c", Nutrient::VitaminCMg, 1.0),
    // Cholesterol
    ("cholesterol_mg", Nutrient::CholesterolMg, 1.0),
    ("cholesterol", Nutrient::CholesterolMg, 1.0),
];

/// Resolves a raw column header against the alias table.
///
/// Matching is case-insensitive on the trimmed header.
pub fn alias_for(header: &str) -> Option<(Nutrient, f64)> {
    let key = header.trim().to_lowercase();
    ALIAS_TABLE
        .iter()
        .find(|(alias, _, _)| *alias == key)
        .map(|(_, nutrient, scale)| (*nutrient, *scale))
}

/// Nutrient-definition IDs used by the relational reference layout
/// (FoodData Central SR Legacy style), mapped to canonical fields.
pub const NUTRIENT_ID_TABLE: &[(u32, Nutrient)] = &[
    (1008, Nutrient::EnergyKcal),
    (1003, Nutrient::ProteinG),
    (1004, Nutrient::TotalFatG),
    (1005, Nutrient::CarbohydratesG),
    (1079, Nutrient::FiberG),
    (2000, Nutrient::SugarsG),
    (1093, Nutrient::SodiumMg),
    (1092, Nutrient::PotassiumMg),
    (1087, Nutrient::CalciumMg),
    (1089, Nutrient::IronMg),
    (1106, Nutrient::VitaminAIu),
    (1162, Nutrient::VitaminCMg),
    (1253, Nutrient::CholesterolMg),
    (1258, Nutrient::SaturatedFatG),
];

pub fn nutrient_for_id(id: u32) -> Option<Nutrient> {
    NUTRIENT_ID_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, nutrient)| *nutrient)
}
