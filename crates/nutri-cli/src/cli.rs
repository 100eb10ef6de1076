//! CLI argument definitions for the dataset unification tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nutri-unify",
    version,
    about = "Unify nutrition datasets into one food feature table",
    long_about = "Clean and merge independently-sourced nutrition datasets\n\
                  (reference nutrient database, meal logs, disease suitability,\n\
                  diet recommendations) into one table keyed by food identity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full unification pipeline and write the unified table.
    Run(RunArgs),

    /// Look up one food by free-text name in an existing unified table.
    Lookup(LookupArgs),

    /// Print the resolved pipeline configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Datasets directory containing the per-source subdirectories.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "datasets")]
    pub data_dir: PathBuf,

    /// Output path for the unified table
    /// (default: <DATA_DIR>/processed/unified_food_features.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Free-text food name to look up.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path to the unified table.
    #[arg(
        long = "table",
        value_name = "PATH",
        default_value = "datasets/processed/unified_food_features.csv"
    )]
    pub table: PathBuf,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Datasets directory the configuration is resolved against.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "datasets")]
    pub data_dir: PathBuf,
}
