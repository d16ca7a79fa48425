mod format;
mod json;
mod table;

pub(crate) use json::output_summary_json;
pub(crate) use table::{print_planned_payloads, print_summary_table};
