use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigDatePolicy {
    Skip,
    Abort,
}

/// Optional run settings. Every field can also be given on the command line,
/// which wins.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub(crate) csv: Vec<String>,
    #[serde(default)]
    pub(crate) mapping: Option<PathBuf>,
    #[serde(default)]
    pub(crate) api_config: Option<PathBuf>,
    #[serde(default)]
    pub(crate) log_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) record_id: Option<String>,
    #[serde(default)]
    pub(crate) date_policy: Option<ConfigDatePolicy>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) delimiter: Option<String>,
    #[serde(default)]
    pub(crate) reload_config: bool,
}

impl Settings {
    /// Load from an explicit file; parse errors are fatal here.
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Read {
            kind: "settings",
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First readable settings file from the standard locations, or defaults.
    pub(crate) fn discover() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Settings>(&content) {
                    Ok(settings) => {
                        debug!("Loaded settings from {}", path.display());
                        return settings;
                    }
                    Err(e) => warn!("Failed to parse {}: {}", path.display(), e),
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // ~/.config/timepatch/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("timepatch").join("config.toml"));
        }

        // Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("timepatch").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".timepatch.toml"));
        }

        paths
    }
}
