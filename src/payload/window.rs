//! Day-aligned outer window around an interval

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::consts::WINDOW_HOUR;

fn at_window_hour(date: NaiveDate) -> String {
    format!(
        "{}T{:02}:00:00.000Z",
        date.format(crate::consts::DATE_FORMAT),
        WINDOW_HOUR
    )
}

/// The UTC calendar day before `instant`, at 23:00:00.000Z.
/// The time-of-day of `instant` does not matter.
pub(crate) fn previous_day_at_23(instant: DateTime<Utc>) -> String {
    let day = instant.date_naive();
    let previous = day.checked_sub_days(Days::new(1)).unwrap_or(day);
    at_window_hour(previous)
}

/// The UTC calendar day of `instant`, at 23:00:00.000Z.
pub(crate) fn same_day_at_23(instant: DateTime<Utc>) -> String {
    at_window_hour(instant.date_naive())
}
