//! Append-only audit trail of outgoing requests

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::api::RequestHeaders;
use crate::payload::Payload;

const SEPARATOR: &str = "-------------------------------------------";

/// Render one log block. Each block ends with the separator line.
pub(crate) fn format_entry(
    at: DateTime<Utc>,
    headers: &RequestHeaders,
    payload: &Payload,
) -> Result<String, serde_json::Error> {
    Ok(format!(
        "Request Time: {}\nHeaders: {}\nPayload: {}\n{SEPARATOR}\n",
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        serde_json::to_string_pretty(headers)?,
        serde_json::to_string_pretty(payload)?,
    ))
}

#[derive(Debug, Clone)]
pub(crate) struct RequestLogger {
    path: PathBuf,
}

impl RequestLogger {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        RequestLogger { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append a block stamped with the current time, creating the file if needed.
    /// The block goes out in a single write.
    pub(crate) fn append(&self, headers: &RequestHeaders, payload: &Payload) -> io::Result<()> {
        let entry = format_entry(Utc::now(), headers, payload).map_err(io::Error::other)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Interval;
    use std::fs;

    fn headers() -> RequestHeaders {
        RequestHeaders {
            cookie: "session=abc".to_string(),
            authorization: "Bearer t".to_string(),
            origin: "https://app.example.com".to_string(),
            referer: "https://app.example.com/".to_string(),
            content_type: "application/json".to_string(),
        }
    }

    fn payload(project: &str) -> Payload {
        Payload {
            id: "rec-1".to_string(),
            intervals: vec![Interval {
                start_time: "2024-11-05T10:00:00Z".to_string(),
                end_time: "2024-11-05T12:00:00Z".to_string(),
                project_id: project.to_string(),
            }],
            start_time: "2024-11-04T23:00:00.000Z".to_string(),
            end_time: "2024-11-05T23:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn entry_layout() {
        let at = "2024-11-05T12:34:56.789Z".parse::<DateTime<Utc>>().unwrap();
        let entry = format_entry(at, &headers(), &payload("proj-1")).unwrap();
        let lines: Vec<_> = entry.lines().collect();

        assert_eq!(lines[0], "Request Time: 2024-11-05T12:34:56.789Z");
        assert_eq!(lines[1], "Headers: {");
        assert_eq!(lines[2], r#"  "Cookie": "session=abc","#);
        assert!(lines.contains(&"Payload: {"));
        assert!(lines.contains(&r#"      "projectId": "proj-1""#));
        assert_eq!(*lines.last().unwrap(), SEPARATOR);
    }

    #[test]
    fn empty_headers_are_not_logged() {
        let at = "2024-11-05T12:34:56.789Z".parse::<DateTime<Utc>>().unwrap();
        let headers = RequestHeaders {
            cookie: String::new(),
            origin: String::new(),
            referer: String::new(),
            ..headers()
        };
        let entry = format_entry(at, &headers, &payload("proj-1")).unwrap();

        assert!(entry.contains(r#""Authorization": "Bearer t""#));
        assert!(entry.contains(r#""Content-Type": "application/json""#));
        assert!(!entry.contains("Cookie"));
        assert!(!entry.contains("Referer"));
        assert!(!entry.contains(r#""""#));
    }

    #[test]
    fn append_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RequestLogger::new(dir.path().join("api_requests.log"));

        logger.append(&headers(), &payload("proj-1")).unwrap();
        logger.append(&headers(), &payload("proj-2")).unwrap();

        let content = fs::read_to_string(logger.path()).unwrap();
        assert_eq!(content.matches("Request Time: ").count(), 2);
        assert_eq!(content.matches(SEPARATOR).count(), 2);
        let first = content.find("proj-1").unwrap();
        let second = content.find("proj-2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn append_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RequestLogger::new(dir.path().join("nope").join("api.log"));
        assert!(logger.append(&headers(), &payload("proj-1")).is_err());
    }
}
