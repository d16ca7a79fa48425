use chrono::{DateTime, Utc};

use crate::consts::{END_COLUMN, START_COLUMN};
use crate::error::PayloadError;
use crate::input::CsvRow;
use crate::utils::{Timezone, parse_timestamp};

use super::types::{Interval, Payload};
use super::window::{previous_day_at_23, same_day_at_23};

fn parse_field(
    row: &CsvRow,
    field: &'static str,
    timezone: Timezone,
) -> Result<(String, DateTime<Utc>), PayloadError> {
    let raw = row.get(field).unwrap_or_default();
    match parse_timestamp(raw, timezone) {
        Some(instant) => Ok((raw.to_string(), instant)),
        None => Err(PayloadError::InvalidDateFormat {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Build the request body for one CSV row.
///
/// The interval carries the CSV strings verbatim; only the outer window is
/// derived from the parsed instants.
pub(crate) fn build_payload(
    row: &CsvRow,
    project_id: &str,
    record_id: &str,
    timezone: Timezone,
) -> Result<Payload, PayloadError> {
    let (raw_start, start) = parse_field(row, START_COLUMN, timezone)?;
    let (raw_end, end) = parse_field(row, END_COLUMN, timezone)?;

    Ok(Payload {
        id: record_id.to_string(),
        intervals: vec![Interval {
            start_time: raw_start,
            end_time: raw_end,
            project_id: project_id.to_string(),
        }],
        start_time: previous_day_at_23(start),
        end_time: same_day_at_23(end),
    })
}
