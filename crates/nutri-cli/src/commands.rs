//! Subcommand implementations.

use anyhow::{Context, Result};

use nutri_cli::pipeline::{PipelineRun, run_pipeline};
use nutri_lookup::{UnifiedStore, disease_flags, lookup, nutrient_summary};
use nutri_model::PipelineConfig;

use crate::cli::{ConfigArgs, LookupArgs, RunArgs};

pub fn run(args: &RunArgs) -> Result<PipelineRun> {
    let mut config = PipelineConfig::new(&args.data_dir);
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    run_pipeline(&config)
}

pub fn run_lookup(args: &LookupArgs) -> Result<()> {
    let store = UnifiedStore::new(&args.table);
    let table = store.table()?;
    let Some(row) = lookup(&args.name, table) else {
        println!("no match for {:?}", args.name);
        return Ok(());
    };
    println!("{} (key: {})", row.food_name, row.key);
    println!("sources: {}", row.source_datasets());
    for (field, value) in nutrient_summary(row) {
        println!("  {field}: {value}");
    }
    for (field, flag) in disease_flags(row) {
        println!("  {field}: {flag}");
    }
    Ok(())
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig::new(&args.data_dir);
    let rendered =
        serde_json::to_string_pretty(&config).context("serialize pipeline configuration")?;
    println!("{rendered}");
    Ok(())
}
