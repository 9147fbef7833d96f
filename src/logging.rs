use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber, appending to the configured log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout or
/// stderr. `RUST_LOG` takes precedence over `logging.level`. Returns the
/// log file path.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = config.resolved_file();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // A subscriber may already be installed (tests); keep that one.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
    {
        tracing::debug!(
            error = %err,
            path = %path.display(),
            "Tracing subscriber already installed, log file not attached"
        );
    }

    Ok(path)
}
