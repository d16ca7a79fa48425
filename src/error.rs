use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole run before or while rows are processed.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {kind} file {path}: {source}")]
    Read {
        kind: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {kind} file {path}: {source}")]
    Parse {
        kind: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read CSV {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Failed to parse settings {path}: {source}")]
    Settings {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid CSV pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("No CSV file matched {0}")]
    NoInput(String),

    #[error("No record id configured (pass --record-id or set record_id in settings)")]
    MissingRecordId,

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Delimiter must be a single ASCII character, got \"{input}\"")]
    InvalidDelimiter { input: String },

    #[error("Aborted at {file} line {line}: {source}")]
    Aborted {
        file: PathBuf,
        line: u64,
        source: PayloadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PayloadError {
    #[error("Invalid date in column {field}: \"{value}\"")]
    InvalidDateFormat { field: &'static str, value: String },
}

/// Per-row failures of a submission. None of these stop the batch.
#[derive(Debug, Error)]
pub(crate) enum SubmitError {
    #[error("{0}")]
    Config(#[from] AppError),

    #[error("Failed to write request log: {0}")]
    Log(std::io::Error),

    #[error("Failed to serialize payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl SubmitError {
    /// Text shown to the operator: the server's body when there is one, otherwise the error itself.
    pub(crate) fn detail(&self) -> String {
        match self {
            SubmitError::Status { status, body } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            SubmitError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
