//! Pipeline driver: run every processor, merge in priority order, persist.

use anyhow::Result;
use tracing::{info, info_span};

use nutri_clean::{
    DietProcessor, DiseaseProcessor, MealsProcessor, ReferenceProcessor, SourceProcessor,
};
use nutri_merge::{merge, write_unified};
use nutri_model::{CleanedTable, PipelineConfig, UnifiedTable};

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PipelineRun {
    pub table: UnifiedTable,
    /// Per-source cleaned row counts, in priority order.
    pub source_counts: Vec<(String, usize)>,
}

/// Runs the four processors in fixed priority order, merges, and writes the
/// unified table to the configured output path.
///
/// Every processor runs unconditionally; a missing source contributes an
/// empty table and the pipeline proceeds with fewer contributors. Source
/// priority is the merge fold order: the reference database wins conflicts,
/// then meals, disease, diet.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineRun> {
    let span = info_span!("pipeline", data_dir = %config.data_dir.display());
    let _guard = span.enter();

    let cleaned: Vec<CleanedTable> = vec![
        ReferenceProcessor::new(config).run()?,
        MealsProcessor::new(config).run()?,
        DiseaseProcessor::new(config).run()?,
        DietProcessor::new(config).run()?,
    ];
    let source_counts: Vec<(String, usize)> = cleaned
        .iter()
        .map(|table| (table.source_tag.clone(), table.rows.len()))
        .collect();

    let table = merge(&cleaned);
    write_unified(&config.output_path, &table)?;
    info!(
        rows = table.rows.len(),
        output = %config.output_path.display(),
        "pipeline complete"
    );
    Ok(PipelineRun {
        table,
        source_counts,
    })
}
