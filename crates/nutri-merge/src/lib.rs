pub mod engine;
pub mod writer;

pub use engine::merge;
pub use writer::write_unified;
