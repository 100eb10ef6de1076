pub mod logging;
pub mod pipeline;
pub mod summary;

pub use pipeline::{PipelineRun, run_pipeline};
