/// Calendar date layout used in the outer window: "2024-11-05"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV column holding the company/task name looked up in the mapping
pub(crate) const TASK_COLUMN: &str = "Task";

/// CSV column holding the interval start (the header contains a literal backslash)
pub(crate) const START_COLUMN: &str = "Date\\Started";

/// CSV column holding the interval end
pub(crate) const END_COLUMN: &str = "End";

pub(crate) const DEFAULT_CSV_PATH: &str = "2024-11-01.csv";
pub(crate) const DEFAULT_MAPPING_PATH: &str = "mapping.json";
pub(crate) const DEFAULT_API_CONFIG_PATH: &str = "config.json";
pub(crate) const DEFAULT_LOG_PATH: &str = "api_requests.log";

/// Content-Type sent when the API config leaves `contentType` empty
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Hour (UTC) at which the outer window opens and closes
pub(crate) const WINDOW_HOUR: u32 = 23;

/// Record id shown in dry-run output when none is configured
pub(crate) const UNSET_RECORD_ID: &str = "unset";
