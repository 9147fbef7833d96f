use clap::Parser;
use std::path::PathBuf;
use student_roster::cli::Cli;
use student_roster::config::Config;
use student_roster::roster::RecordStore;
use student_roster::storage::Persistence;
use tempfile::TempDir;

#[test]
fn no_args_uses_defaults() {
    let cli = Cli::try_parse_from(["student-roster"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.storage.is_none());
    assert!(!cli.ephemeral);
}

#[test]
fn overrides_replace_config_paths() {
    let cli = Cli::try_parse_from([
        "student-roster",
        "--storage",
        "/data/rows.json",
        "--log-file",
        "/logs/roster.log",
    ])
    .unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.storage.path, Some(PathBuf::from("/data/rows.json")));
    assert_eq!(config.logging.file, Some(PathBuf::from("/logs/roster.log")));
}

#[test]
fn storage_conflicts_with_ephemeral() {
    let result = Cli::try_parse_from(["student-roster", "--storage", "x.json", "--ephemeral"]);
    assert!(result.is_err());
}

#[test]
fn ephemeral_storage_is_in_memory() {
    let cli = Cli::try_parse_from(["student-roster", "--ephemeral"]).unwrap();
    let store = RecordStore::open(Persistence::new(cli.open_storage(&Config::default().storage)));
    assert_eq!(store.storage_location(), "in-memory (not saved)");
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 40\n").unwrap();

    let cli = Cli::try_parse_from([
        "student-roster",
        "--config",
        path.to_str().unwrap(),
        "--storage",
        "/data/rows.json",
    ])
    .unwrap();
    let config = cli.load_config().unwrap();

    assert_eq!(config.ui.tick_rate_ms, 40);
    assert_eq!(config.storage.path, Some(PathBuf::from("/data/rows.json")));
}
