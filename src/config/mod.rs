mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AgeErrorTimerPolicy, Config, FormConfig, LoggingConfig, StorageConfig, UiConfig,
};
