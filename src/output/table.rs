use crate::app::{RowOutcome, RunSummary};
use crate::output::format::{
    create_styled_table, header_cell, outcome_cell, right_cell, truncate_detail,
};

const DETAIL_WIDTH: usize = 60;

/// One-line totals, e.g. "3 submitted, 1 skipped, 0 failed"
fn summary_line(summary: &RunSummary) -> String {
    if summary.is_aborted() {
        return format!(
            "{} submitted, {} planned, {} skipped, {} failed (aborted)",
            summary.submitted, summary.planned, summary.skipped, summary.failed
        );
    }
    if summary.planned > 0 {
        return format!(
            "{} planned, {} skipped, {} failed (dry run)",
            summary.planned, summary.skipped, summary.failed
        );
    }
    format!(
        "{} submitted, {} skipped, {} failed",
        summary.submitted, summary.skipped, summary.failed
    )
}

pub(crate) fn print_summary_table(summary: &RunSummary, use_color: bool) {
    if summary.rows.is_empty() {
        println!("No rows found.");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("File", use_color),
        header_cell("Line", use_color),
        header_cell("Task", use_color),
        header_cell("Outcome", use_color),
        header_cell("Detail", use_color),
    ]);

    for row in &summary.rows {
        table.add_row(vec![
            comfy_table::Cell::new(&row.file),
            right_cell(&row.line.to_string()),
            comfy_table::Cell::new(&row.task),
            outcome_cell(row.outcome, use_color),
            comfy_table::Cell::new(truncate_detail(&row.detail, DETAIL_WIDTH)),
        ]);
    }

    println!("{table}");
    println!("\n  {}\n", summary_line(summary));
}

/// Dry-run payloads, pretty-printed in row order
pub(crate) fn print_planned_payloads(summary: &RunSummary) {
    for row in &summary.rows {
        if row.outcome != RowOutcome::Planned {
            continue;
        }
        if let Some(payload) = &row.payload
            && let Ok(json) = serde_json::to_string_pretty(payload)
        {
            println!("# {}:{} {}", row.file, row.line, row.task);
            println!("{json}");
        }
    }
}
