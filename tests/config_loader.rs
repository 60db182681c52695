use std::fs;

use diffable_lists::config::{Config, ConfigError};
use tempfile::TempDir;

/// Defaults mirror the original apps.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.countdown.start_from, 10);
    assert_eq!(config.countdown.tick_interval_ms, 1000);
    assert!(config.shopping.seed_sample_items);
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("diffable-lists/config.toml"));
}

#[test]
fn test_full_file_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[countdown]
start_from = 5
tick_interval_ms = 250

[shopping]
seed_sample_items = false

[logging]
filter = "diffable_lists=debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.countdown.start_from, 5);
    assert_eq!(config.countdown.tick_interval_ms, 250);
    assert!(!config.shopping.seed_sample_items);
    assert_eq!(config.logging.filter, "diffable_lists=debug");

    let written = toml::to_string(&config).unwrap();
    assert_eq!(toml::from_str::<Config>(&written).unwrap(), config);
}

#[test]
fn test_blank_filter_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[logging]\nfilter = \"  \"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("logging.filter"));
}
