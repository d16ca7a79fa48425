//! Time-tracker CSV export reader
//!
//! Rows are keyed by header name and buffered in full before processing starts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// One data line of the export, keyed by column header
#[derive(Debug, Clone, Default)]
pub(crate) struct CsvRow {
    line: u64,
    fields: HashMap<String, String>,
}

impl CsvRow {
    pub(crate) fn from_pairs<'a>(
        line: u64,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        CsvRow {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// 1-based line in the source file (the header is line 1)
    pub(crate) fn line(&self) -> u64 {
        self.line
    }

    pub(crate) fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Read every row of `path`. Any I/O or framing error fails the whole file.
pub(crate) fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<CsvRow>, AppError> {
    let to_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(to_err)?;
    let headers = reader.headers().map_err(to_err)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(to_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(CsvRow::from_pairs(line, headers.iter().zip(record.iter())));
    }
    Ok(rows)
}

fn is_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Turn CLI inputs into concrete files. Plain paths pass through untouched
/// (a missing file fails later, on read); glob patterns must match something.
pub(crate) fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for input in inputs {
        if !is_pattern(input) {
            files.push(PathBuf::from(input));
            continue;
        }
        let entries = glob::glob(input).map_err(|source| AppError::Pattern {
            pattern: input.clone(),
            source,
        })?;
        let mut matched: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
        if matched.is_empty() {
            return Err(AppError::NoInput(input.clone()));
        }
        matched.sort();
        files.extend(matched);
    }
    Ok(files)
}
