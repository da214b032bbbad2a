//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{table::TableConfig, AppConfig, ConfigLoader, LogConfig, Validate};
use crate::data_structures::alphabet_table::{AlphabetTable, DEFAULT_CAPACITY};
use crate::error::config::ConfigError;
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.table.capacity, DEFAULT_CAPACITY);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.table.capacity = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.table.capacity = 5;
    config.log.level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log = LogConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that table settings produce a table with the configured capacity.
#[test]
fn test_table_config_builds_table() {
    let settings = TableConfig { capacity: 5 };
    let table = AlphabetTable::with_config(settings.to_table_config()).unwrap();
    assert_eq!(table.capacity(), 5);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [table]
    capacity = 5

    [log]
    level = "debug"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.table.capacity, 5);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(!config.log.json);
    assert!(config.log.source_location);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "table": { "capacity": 7 } }"#).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_JSON");
    let config = loader.load().unwrap();
    assert_eq!(config.table.capacity, 7);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");
    fs::write(&config_path, "[table]\ncapacity = 5\n").unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__TABLE__CAPACITY", "11");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.table.capacity, 11);

    std::env::remove_var("TEST_ENV__TABLE__CAPACITY");
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_NO_FILE");
    assert_eq!(loader.load().unwrap(), AppConfig::default());
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("does_not_exist.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that unknown file extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "capacity=5").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    let config_content = r#"
    [table
    capacity = five"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a zero capacity in a file fails validation.
#[test]
fn test_load_zero_capacity() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("zero.toml");
    fs::write(&config_path, "[table]\ncapacity = 0\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ZERO");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
    assert!(rendered.contains("[table]"));
    assert!(rendered.contains("capacity = 16"));

    let parsed: AppConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, AppConfig::default());
}
