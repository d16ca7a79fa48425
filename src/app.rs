//! Run orchestration: load inputs once, then walk rows strictly in order.

use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::api::{ApiClient, ApiConfig, ConfigSource, Transport, UreqTransport};
use crate::cli::{Cli, DatePolicy};
use crate::consts::{TASK_COLUMN, UNSET_RECORD_ID};
use crate::error::AppError;
use crate::input::{CompanyMapping, CsvRow, expand_inputs, read_rows};
use crate::payload::{Payload, build_payload};
use crate::request_log::RequestLogger;
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum RowOutcome {
    Submitted,
    Skipped,
    Failed,
    /// Payload built in a dry run, nothing sent
    Planned,
}

impl RowOutcome {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RowOutcome::Submitted => "submitted",
            RowOutcome::Skipped => "skipped",
            RowOutcome::Failed => "failed",
            RowOutcome::Planned => "planned",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RowReport {
    pub(crate) file: String,
    pub(crate) line: u64,
    pub(crate) task: String,
    pub(crate) outcome: RowOutcome,
    pub(crate) detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) payload: Option<Payload>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct RunSummary {
    pub(crate) submitted: usize,
    pub(crate) skipped: usize,
    pub(crate) failed: usize,
    pub(crate) planned: usize,
    pub(crate) rows: Vec<RowReport>,
    /// Set when the run stopped early; rows before the stop are still listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) aborted: Option<String>,
}

impl RunSummary {
    fn record(&mut self, report: RowReport) {
        match report.outcome {
            RowOutcome::Submitted => self.submitted += 1,
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::Failed => self.failed += 1,
            RowOutcome::Planned => self.planned += 1,
        }
        self.rows.push(report);
    }

    pub(crate) fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

/// Whether payloads are sent or only built
pub(crate) enum Mode<T: Transport> {
    Submit(ApiClient<T>),
    DryRun,
}

pub(crate) struct Runner<T: Transport> {
    mapping: CompanyMapping,
    mode: Mode<T>,
    record_id: String,
    timezone: Timezone,
    date_policy: DatePolicy,
}

impl<T: Transport> Runner<T> {
    pub(crate) fn new(
        mapping: CompanyMapping,
        mode: Mode<T>,
        record_id: String,
        timezone: Timezone,
        date_policy: DatePolicy,
    ) -> Self {
        Runner {
            mapping,
            mode,
            record_id,
            timezone,
            date_policy,
        }
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> &Mode<T> {
        &self.mode
    }

    /// Process rows one at a time; each call finishes before the next row starts.
    /// Only an unparsable date under `DatePolicy::Abort` stops the loop.
    pub(crate) fn process_file(
        &self,
        file: &Path,
        rows: &[CsvRow],
        summary: &mut RunSummary,
    ) -> Result<(), AppError> {
        for row in rows {
            let report = self.process_row(file, row)?;
            summary.record(report);
        }
        Ok(())
    }

    fn process_row(&self, file: &Path, row: &CsvRow) -> Result<RowReport, AppError> {
        let task = row.get(TASK_COLUMN).unwrap_or_default();
        let report = |outcome, detail: String, payload| RowReport {
            file: file.display().to_string(),
            line: row.line(),
            task: task.to_string(),
            outcome,
            detail,
            payload,
        };

        let Some(project_id) = self.mapping.project_id(task) else {
            warn!("No project ID found for company: {task}");
            return Ok(report(
                RowOutcome::Skipped,
                "no project mapping".to_string(),
                None,
            ));
        };

        let payload = match build_payload(row, project_id, &self.record_id, self.timezone) {
            Ok(payload) => payload,
            Err(source) if self.date_policy == DatePolicy::Abort => {
                return Err(AppError::Aborted {
                    file: file.to_path_buf(),
                    line: row.line(),
                    source,
                });
            }
            Err(e) => {
                warn!("{}:{}: {e}", file.display(), row.line());
                return Ok(report(RowOutcome::Failed, e.to_string(), None));
            }
        };

        match &self.mode {
            Mode::DryRun => Ok(report(
                RowOutcome::Planned,
                project_id.to_string(),
                Some(payload),
            )),
            Mode::Submit(client) => {
                debug!("Submitting {}:{} ({task} -> {project_id})", file.display(), row.line());
                Ok(match client.submit(&payload) {
                    Ok(body) => report(RowOutcome::Submitted, body, None),
                    Err(e) => report(RowOutcome::Failed, e.detail(), None),
                })
            }
        }
    }
}

/// Load everything fatal up front, then submit every row of every input.
/// A stop under `DatePolicy::Abort` is reported through `RunSummary::aborted`
/// so the rows already sent are not lost.
pub(crate) fn run(cli: &Cli) -> Result<RunSummary, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let delimiter = cli.delimiter_byte()?;

    let mapping = CompanyMapping::load(&cli.mapping_path())?;
    info!("Loaded {} company mappings", mapping.len());

    let files = expand_inputs(&cli.csv_inputs())?;
    let mut inputs: Vec<(PathBuf, Vec<CsvRow>)> = Vec::with_capacity(files.len());
    for file in files {
        let rows = read_rows(&file, delimiter)?;
        info!("Read {} rows from {}", rows.len(), file.display());
        inputs.push((file, rows));
    }

    let (mode, record_id) = if cli.dry_run {
        let record_id = cli
            .record_id
            .clone()
            .unwrap_or_else(|| UNSET_RECORD_ID.to_string());
        (Mode::DryRun, record_id)
    } else {
        let record_id = cli.record_id.clone().ok_or(AppError::MissingRecordId)?;
        let config_path = cli.api_config_path();
        let config = if cli.reload_config {
            ConfigSource::Reload(config_path)
        } else {
            ConfigSource::Loaded(ApiConfig::load(&config_path)?)
        };
        let logger = RequestLogger::new(cli.log_path());
        debug!("Logging requests to {}", logger.path().display());
        let client = ApiClient::new(UreqTransport::new(cli.request_timeout()), config, logger);
        (Mode::Submit(client), record_id)
    };

    let runner = Runner::new(mapping, mode, record_id, timezone, cli.date_policy());
    let mut summary = RunSummary::default();
    for (file, rows) in &inputs {
        if let Err(e) = runner.process_file(file, rows, &mut summary) {
            summary.aborted = Some(e.to_string());
            break;
        }
    }
    Ok(summary)
}
