//! CLI argument definitions
//!
//! Command-line options and settings-file merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{ConfigDatePolicy, Settings};
use crate::consts::{
    DEFAULT_API_CONFIG_PATH, DEFAULT_CSV_PATH, DEFAULT_LOG_PATH, DEFAULT_MAPPING_PATH,
};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum DatePolicy {
    /// Warn, mark the row failed and continue (default)
    #[default]
    Skip,
    /// Stop the whole run at the first unparsable date
    Abort,
}

impl From<ConfigDatePolicy> for DatePolicy {
    fn from(policy: ConfigDatePolicy) -> Self {
        match policy {
            ConfigDatePolicy::Skip => DatePolicy::Skip,
            ConfigDatePolicy::Abort => DatePolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "timepatch")]
#[command(
    about = "Submit time-tracking CSV entries to a timesheet API as interval updates",
    version
)]
pub(crate) struct Cli {
    /// CSV export(s) to submit; glob patterns allowed [default: 2024-11-01.csv]
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub(crate) csv: Vec<String>,

    /// Company-to-project mapping JSON [default: mapping.json]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) mapping: Option<PathBuf>,

    /// API connection config JSON [default: config.json]
    #[arg(short = 'a', long, value_name = "PATH")]
    pub(crate) api_config: Option<PathBuf>,

    /// Request audit log [default: api_requests.log]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Record id placed in every payload
    #[arg(short, long, value_name = "ID")]
    pub(crate) record_id: Option<String>,

    /// What to do with rows whose dates cannot be parsed
    #[arg(long, value_enum)]
    pub(crate) date_policy: Option<DatePolicy>,

    /// Timezone for CSV timestamps without an offset (e.g. "Europe/Berlin", "UTC") [default: local]
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Per-request timeout in seconds; 0 disables it [default: none]
    #[arg(long, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// CSV field delimiter [default: ,]
    #[arg(long, value_name = "CHAR")]
    pub(crate) delimiter: Option<String>,

    /// Re-read the API config before every request
    #[arg(long)]
    pub(crate) reload_config: bool,

    /// Build and print payloads without sending or logging them
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Print the run summary as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Exit with status 2 when any row failed
    #[arg(long)]
    pub(crate) strict: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Show debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Settings file (TOML) instead of the standard locations
    #[arg(long, value_name = "PATH")]
    pub(crate) settings: Option<PathBuf>,
}

impl Cli {
    /// Merge settings-file values into CLI (CLI args take precedence)
    pub(crate) fn with_settings(mut self, settings: Settings) -> Self {
        if self.csv.is_empty() {
            self.csv = settings.csv;
        }
        if self.mapping.is_none() {
            self.mapping = settings.mapping;
        }
        if self.api_config.is_none() {
            self.api_config = settings.api_config;
        }
        if self.log_file.is_none() {
            self.log_file = settings.log_file;
        }
        if self.record_id.is_none() {
            self.record_id = settings.record_id;
        }
        if self.date_policy.is_none() {
            self.date_policy = settings.date_policy.map(DatePolicy::from);
        }
        if self.timezone.is_none() {
            self.timezone = settings.timezone;
        }
        if self.timeout.is_none() {
            self.timeout = settings.timeout_secs;
        }
        if self.delimiter.is_none() {
            self.delimiter = settings.delimiter;
        }
        if !self.reload_config && settings.reload_config {
            self.reload_config = true;
        }
        self
    }

    pub(crate) fn csv_inputs(&self) -> Vec<String> {
        if self.csv.is_empty() {
            vec![DEFAULT_CSV_PATH.to_string()]
        } else {
            self.csv.clone()
        }
    }

    pub(crate) fn mapping_path(&self) -> PathBuf {
        self.mapping
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_PATH))
    }

    pub(crate) fn api_config_path(&self) -> PathBuf {
        self.api_config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_API_CONFIG_PATH))
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }

    pub(crate) fn date_policy(&self) -> DatePolicy {
        self.date_policy.unwrap_or_default()
    }

    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub(crate) fn delimiter_byte(&self) -> Result<u8, AppError> {
        let Some(raw) = self.delimiter.as_deref() else {
            return Ok(b',');
        };
        let value = if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
            "\t"
        } else {
            raw
        };
        match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(AppError::InvalidDelimiter {
                input: raw.to_string(),
            }),
        }
    }

    pub(crate) fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["timepatch"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_fixed_file_names() {
        let cli = parse(&[]);
        assert_eq!(cli.csv_inputs(), vec!["2024-11-01.csv"]);
        assert_eq!(cli.mapping_path(), PathBuf::from("mapping.json"));
        assert_eq!(cli.api_config_path(), PathBuf::from("config.json"));
        assert_eq!(cli.log_path(), PathBuf::from("api_requests.log"));
        assert_eq!(cli.date_policy(), DatePolicy::Skip);
        assert_eq!(cli.request_timeout(), None);
        assert_eq!(cli.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        assert_eq!(parse(&["--timeout", "0"]).request_timeout(), None);
        assert_eq!(
            parse(&["--timeout", "30"]).request_timeout(),
            Some(Duration::from_secs(30))
        );

        let settings = Settings {
            timeout_secs: Some(0),
            ..Settings::default()
        };
        assert_eq!(parse(&[]).with_settings(settings).request_timeout(), None);
    }

    #[test]
    fn multiple_csv_inputs() {
        let cli = parse(&["--csv", "a.csv", "b/*.csv"]);
        assert_eq!(cli.csv_inputs(), vec!["a.csv", "b/*.csv"]);
    }

    #[test]
    fn cli_wins_over_settings() {
        let settings = Settings {
            record_id: Some("from-settings".to_string()),
            mapping: Some(PathBuf::from("settings-mapping.json")),
            date_policy: Some(ConfigDatePolicy::Abort),
            timeout_secs: Some(5),
            ..Settings::default()
        };
        let cli = parse(&["--record-id", "from-cli", "--date-policy", "skip"])
            .with_settings(settings);

        assert_eq!(cli.record_id.as_deref(), Some("from-cli"));
        assert_eq!(cli.date_policy(), DatePolicy::Skip);
        assert_eq!(cli.mapping_path(), PathBuf::from("settings-mapping.json"));
        assert_eq!(cli.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn settings_fill_csv_and_reload() {
        let settings = Settings {
            csv: vec!["exports/*.csv".to_string()],
            reload_config: true,
            ..Settings::default()
        };
        let cli = parse(&[]).with_settings(settings);
        assert_eq!(cli.csv_inputs(), vec!["exports/*.csv"]);
        assert!(cli.reload_config);
    }

    #[test]
    fn delimiter_variants() {
        assert_eq!(parse(&["--delimiter", ";"]).delimiter_byte().unwrap(), b';');
        assert_eq!(parse(&["--delimiter", "tab"]).delimiter_byte().unwrap(), b'\t');
        assert_eq!(parse(&["--delimiter", "\\t"]).delimiter_byte().unwrap(), b'\t');
        assert!(parse(&["--delimiter", ";;"]).delimiter_byte().is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(parse(&[]).log_level(), log::LevelFilter::Info);
        assert_eq!(parse(&["-v"]).log_level(), log::LevelFilter::Debug);
        assert_eq!(parse(&["-q"]).log_level(), log::LevelFilter::Warn);
        assert!(Cli::try_parse_from(["timepatch", "-v", "-q"]).is_err());
    }

    #[test]
    fn no_color_overrides_always() {
        assert!(!parse(&["--color", "always", "--no-color"]).use_color());
        assert!(parse(&["--color", "always"]).use_color());
    }
}
