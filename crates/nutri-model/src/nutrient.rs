//! Canonical nutrient fields and their standard units.
//!
//! Every value stored under one of these fields is already expressed in the
//! field's standard unit. Unit conversion happens exactly once, in the alias
//! mapper, before a value enters canonical space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;

/// One of the fourteen canonical nutrient fields of the unified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    EnergyKcal,
    ProteinG,
    TotalFatG,
    CarbohydratesG,
    FiberG,
    SugarsG,
    SodiumMg,
    PotassiumMg,
    CalciumMg,
    IronMg,
    VitaminAIu,
    VitaminCMg,
    CholesterolMg,
    SaturatedFatG,
}

impl Nutrient {
    /// Canonical field order for the unified table.
    pub const ALL: [Nutrient; 14] = [
        Nutrient::EnergyKcal,
        Nutrient::ProteinG,
        Nutrient::TotalFatG,
        Nutrient::CarbohydratesG,
        Nutrient::FiberG,
        Nutrient::SugarsG,
        Nutrient::SodiumMg,
        Nutrient::PotassiumMg,
        Nutrient::CalciumMg,
        Nutrient::IronMg,
        Nutrient::VitaminAIu,
        Nutrient::VitaminCMg,
        Nutrient::CholesterolMg,
        Nutrient::SaturatedFatG,
    ];

    /// Column name in the unified table.
    pub fn code(self) -> &'static str {
        match self {
            Nutrient::EnergyKcal => "energy_kcal",
            Nutrient::ProteinG => "protein_g",
            Nutrient::TotalFatG => "total_fat_g",
            Nutrient::CarbohydratesG => "carbohydrates_g",
            Nutrient::FiberG => "fiber_g",
            Nutrient::SugarsG => "sugars_g",
            Nutrient::SodiumMg => "sodium_mg",
            Nutrient::PotassiumMg => "potassium_mg",
            Nutrient::CalciumMg => "calcium_mg",
            Nutrient::IronMg => "iron_mg",
            Nutrient::VitaminAIu => "vitamin_a_iu",
            Nutrient::VitaminCMg => "vitamin_c_mg",
            Nutrient::CholesterolMg => "cholesterol_mg",
            Nutrient::SaturatedFatG => "saturated_fat_g",
        }
    }

    /// Standard unit for display and validation.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::EnergyKcal => "kcal",
            Nutrient::ProteinG
            | Nutrient::TotalFatG
            | Nutrient::CarbohydratesG
            | Nutrient::FiberG
            | Nutrient::SugarsG
            | Nutrient::SaturatedFatG => "g",
            Nutrient::SodiumMg
            | Nutrient::PotassiumMg
            | Nutrient::CalciumMg
            | Nutrient::IronMg
            | Nutrient::VitaminCMg
            | Nutrient::CholesterolMg => "mg",
            Nutrient::VitaminAIu => "IU",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Nutrient {
    type Err = PipelineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Nutrient::ALL
            .into_iter()
            .find(|n| n.code() == s)
            .ok_or_else(|| PipelineError::Message(format!("unknown nutrient field: {s}")))
    }
}
