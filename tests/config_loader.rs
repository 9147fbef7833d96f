use std::path::PathBuf;
use student_roster::config::{AgeErrorTimerPolicy, Config, ConfigError};
use student_roster::storage::DEFAULT_QUOTA_BYTES;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.storage.path, None);
    assert_eq!(config.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
    assert_eq!(config.form.age_error_ms, 3000);
    assert_eq!(config.form.age_error_timer, AgeErrorTimerPolicy::Fixed);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[storage]
path = "/tmp/roster/storage.json"
quota_bytes = 1024

[form]
age_error_ms = 1500
age_error_timer = "restart"

[ui]
tick_rate_ms = 100

[logging]
level = "debug"
file = "/tmp/roster/roster.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.storage.resolved_path(),
        PathBuf::from("/tmp/roster/storage.json")
    );
    assert_eq!(config.storage.quota_bytes, 1024);
    assert_eq!(config.form.age_error_ms, 1500);
    assert_eq!(config.form.age_error_timer, AgeErrorTimerPolicy::Restart);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.resolved_file(),
        PathBuf::from("/tmp/roster/roster.log")
    );
}

#[test]
fn partial_sections_fill_defaults() {
    let (_dir, path) = write_config("[form]\nage_error_timer = \"fixed\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.form.age_error_ms, 3000);
    assert_eq!(config.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
}

#[test]
fn unknown_timer_policy_is_a_parse_error() {
    let (_dir, path) = write_config("[form]\nage_error_timer = \"sometimes\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_values_fail_validation() {
    for content in [
        "[storage]\nquota_bytes = 0\n",
        "[ui]\ntick_rate_ms = 0\n",
        "[form]\nage_error_ms = 0\n",
    ] {
        let (_dir, path) = write_config(content);
        let err = Config::load_from(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { .. }),
            "{content:?} should fail validation, got {err}"
        );
    }
}

#[test]
fn default_paths_live_under_student_roster() {
    assert!(Config::config_path().ends_with("student-roster/config.toml"));
    let config = Config::default();
    assert!(config
        .storage
        .resolved_path()
        .ends_with("student-roster/storage.json"));
    assert!(config
        .logging
        .resolved_file()
        .ends_with("student-roster/student-roster.log"));
}
