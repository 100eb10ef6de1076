pub mod alias_map;
pub mod diet;
pub mod disease;
pub mod meals;
pub mod normalize;
pub mod processor;
pub mod reference;
pub mod suitability;

pub use alias_map::{NutrientColumns, map_nutrient_columns};
pub use diet::DietProcessor;
pub use disease::DiseaseProcessor;
pub use meals::MealsProcessor;
pub use normalize::{find_column, find_column_index, normalize_food_name};
pub use processor::SourceProcessor;
pub use reference::ReferenceProcessor;
pub use suitability::parse_suitability;
