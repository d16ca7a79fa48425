use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone used to place offset-less CSV timestamps on the timeline.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Resolve a wall-clock time in this zone to UTC.
    /// Ambiguous times (DST fall-back) take the earlier instant; skipped times yield None.
    pub(crate) fn to_utc(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Timezone::Local => pick(chrono::Local.from_local_datetime(&naive)),
            Timezone::Named(tz) => pick(tz.from_local_datetime(&naive)),
        }
    }
}

fn pick<T: TimeZone>(result: LocalResult<DateTime<T>>) -> Option<DateTime<Utc>> {
    match result {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("  LOCAL ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for input in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(input)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Europe/Berlin")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Europe::Berlin)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn utc_zone_is_identity() {
        let tz = Timezone::Named(chrono_tz::UTC);
        let utc = tz.to_utc(naive("2024-11-05 10:00:00")).unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-11-05T10:00:00+00:00");
    }

    #[test]
    fn named_zone_shifts_to_utc() {
        let tz = Timezone::parse(Some("Europe/Berlin")).unwrap();
        // CET is UTC+1 in November
        let utc = tz.to_utc(naive("2024-11-05 00:30:00")).unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-11-04T23:30:00+00:00");
    }

    #[test]
    fn skipped_wall_clock_time_is_none() {
        let tz = Timezone::parse(Some("Europe/Berlin")).unwrap();
        // Clocks jump from 02:00 to 03:00 on 2024-03-31
        assert!(tz.to_utc(naive("2024-03-31 02:30:00")).is_none());
    }
}
