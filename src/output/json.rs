use crate::app::RunSummary;

/// Run summary as pretty JSON: totals plus one entry per row
pub(crate) fn output_summary_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
