use chrono::{DateTime, NaiveDateTime, Utc};

use super::Timezone;

/// Offset-less layouts seen in time-tracker exports
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a CSV timestamp into a UTC instant.
///
/// Strings carrying an offset (RFC 3339) are taken as-is; naive ones are
/// interpreted as wall-clock time in `timezone`.
pub(crate) fn parse_timestamp(s: &str, timezone: Timezone) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| timezone.to_utc(naive))
}
