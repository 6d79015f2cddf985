//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::TestFixture;
use crate::config::{ConfigLoader, LogConfig, PukaConfig, TableConfig, Validate};
use crate::data_structures::puka_cuckoo_hash::{PukaCuckooHashConfig, MAX_CAPACITY};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = PukaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.table.capacity, 101);
    assert_eq!(config.table.hash_functions, 2);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = PukaConfig::default();

    config.table.capacity = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.table.capacity = 10;
    config.table.hash_functions = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "table.hash_functions"
    ));

    config.table.capacity = usize::MAX;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "table.capacity"
    ));

    config.table.capacity = 10;
    config.table.hash_functions = 9;
    assert!(config.validate().is_err());

    config.table.hash_functions = 8;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file(
            "puka.toml",
            r#"
            [table]
            capacity = 50
            hash_functions = 3

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_FILE").load().unwrap();

    assert_eq!(config.table.capacity, 50);
    assert_eq!(config.table.hash_functions, 3);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(!config.log.json);
    assert!(config.log.source_location);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("puka.json", r#"{"table": {"capacity": 7}}"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON").load().unwrap();
    assert_eq!(config.table.capacity, 7);
    assert_eq!(config.table.hash_functions, 2);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("puka.toml", "[table]\ncapacity = 50\n")
        .unwrap();

    fixture.set_env("TEST_ENV__TABLE__CAPACITY", "211");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(Some(&path), "TEST_ENV").load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.table.capacity, 211);
    assert!(config.log.json);
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&str>, "TEST_NO_FILE").load().unwrap();
    assert_eq!(config, PukaConfig::default());
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&path), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let path = fixture
        .write_file("invalid.toml", "[table\ncapacity = fifty\"\n")
        .unwrap();
    let result = ConfigLoader::new(Some(&path), "TEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));

    let path = fixture.write_file("puka.ini", "capacity=1").unwrap();
    let result = ConfigLoader::new(Some(&path), "TEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that values loaded from a file are validated.
#[test]
fn test_loaded_config_is_validated() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("puka.toml", "[table]\nhash_functions = 12\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_VALIDATED").load();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_generated_config_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&PukaConfig::default()).unwrap();
    let path = fixture.write_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config, PukaConfig::default());
}

/// Test conversion into the table's own configuration.
#[test]
fn test_table_config_conversion() {
    let table = TableConfig {
        capacity: 20,
        hash_functions: 4,
    };
    let converted = PukaCuckooHashConfig::from(&table);

    assert_eq!(converted.capacity, 20);
    assert_eq!(converted.hash_function_count, 4);
    assert!(converted.validate().is_ok());
}

/// Test that an oversized capacity from the environment is rejected.
#[test]
fn test_env_capacity_above_limit_is_rejected() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_HUGE__TABLE__CAPACITY", (MAX_CAPACITY + 1).to_string());

    let result = ConfigLoader::new(None::<&str>, "TEST_HUGE").load();
    assert!(matches!(
        result,
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "table.capacity"
    ));
}
