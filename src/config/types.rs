use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::storage::{FileStorage, DEFAULT_QUOTA_BYTES};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where student rows are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file; defaults to `<data_dir>/student-roster/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Maximum size of all stored keys and values (default: 5 MiB).
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

/// Behaviour of the student form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long the age field stays flagged after a rejected age (default: 3000).
    #[serde(default = "default_age_error_ms")]
    pub age_error_ms: u64,
    /// What a repeated rejection does to a pending flag clear.
    #[serde(default)]
    pub age_error_timer: AgeErrorTimerPolicy,
}

/// Scheduling of the age error flag clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeErrorTimerPolicy {
    /// Each rejection schedules its own clear; none is ever cancelled.
    #[default]
    Fixed,
    /// A rejection cancels the pending clear and schedules a new one.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to `<data_dir>/student-roster/student-roster.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_quota_bytes() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn default_age_error_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStorage::default_path)
    }
}

impl LoggingConfig {
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("student-roster").join("student-roster.log")
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            age_error_ms: default_age_error_ms(),
            age_error_timer: AgeErrorTimerPolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
