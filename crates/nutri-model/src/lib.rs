pub mod aliases;
pub mod config;
pub mod error;
pub mod nutrient;
pub mod record;
pub mod suitability;

pub use aliases::{ALIAS_TABLE, NUTRIENT_ID_TABLE, alias_for, nutrient_for_id};
pub use config::{PipelineConfig, SourcePaths};
pub use error::{PipelineError, Result};
pub use nutrient::Nutrient;
pub use record::{CleanedRow, CleanedTable, UnifiedRow, UnifiedTable, unified_columns};
pub use suitability::{Condition, Suitability};
