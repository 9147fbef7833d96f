use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, StorageConfig};
use crate::storage::{FileStorage, MemoryStorage, Storage};

#[derive(Debug, Parser)]
#[command(
    name = "student-roster",
    version,
    about = "Record, edit, list and delete students from the terminal"
)]
pub struct Cli {
    /// Config file [default: <config_dir>/student-roster/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file, overriding `storage.path`
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub storage: Option<PathBuf>,

    /// Keep rows in memory only; nothing is read or written on disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Log file, overriding `logging.file`
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.storage {
            config.storage.path = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    pub fn open_storage(&self, config: &StorageConfig) -> Box<dyn Storage> {
        if self.ephemeral {
            return Box::new(MemoryStorage::new());
        }
        Box::new(FileStorage::new(config.resolved_path(), config.quota_bytes))
    }
}
