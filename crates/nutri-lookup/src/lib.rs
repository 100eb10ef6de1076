pub mod reader;
pub mod search;
pub mod store;
pub mod training;

pub use reader::read_unified;
pub use search::{disease_flags, lookup, nutrient_summary};
pub use store::UnifiedStore;
pub use training::{FeatureMatrix, condition_targets, feature_matrix};
