//! Run summary printed after a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::PipelineRun;

pub fn print_summary(run: &PipelineRun) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Source"), Cell::new("Cleaned rows")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (source, count) in &run.source_counts {
        table.add_row(vec![Cell::new(source), Cell::new(count)]);
    }
    table.add_row(vec![Cell::new("unified"), Cell::new(run.table.len())]);
    println!("{table}");
}
