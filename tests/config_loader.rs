use std::path::PathBuf;

use userdeck::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.data.path.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("userdeck/config.toml"));
}

/// Test validation passes for the default config.
#[test]
fn test_validation_passes_for_default() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

/// Test validation fails when the tick rate is zero.
#[test]
fn test_validation_fails_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;

    let result = config.validate();
    assert!(result.is_err());

    match result.unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

/// Test that valid TOML parses correctly.
#[test]
fn test_parse_valid_toml() {
    let toml_content = r#"
[data]
path = "/tmp/roster.json"

[ui]
tick_rate_ms = 100
"#;

    let config: Config = toml::from_str(toml_content).expect("Should parse valid TOML");

    assert_eq!(config.data.path, Some(PathBuf::from("/tmp/roster.json")));
    assert_eq!(config.ui.tick_rate_ms, 100);
}

/// Test that omitted sections fall back to their defaults.
#[test]
fn test_parse_partial_toml_uses_defaults() {
    let toml_content = r#"
[data]
path = "/tmp/roster.json"
"#;

    let config: Config = toml::from_str(toml_content).expect("Should parse valid TOML");

    assert_eq!(config.data.path, Some(PathBuf::from("/tmp/roster.json")));
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that an empty file yields the default config.
#[test]
fn test_parse_empty_toml_is_default() {
    let config: Config = toml::from_str("").expect("Should parse empty TOML");

    assert!(config.data.path.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that invalid TOML produces a parse error.
#[test]
fn test_parse_invalid_toml() {
    let invalid_toml = "this is not valid toml [[[";

    let result: Result<Config, _> = toml::from_str(invalid_toml);
    assert!(result.is_err());
}

/// Test round-trip serialization/deserialization.
#[test]
fn test_config_roundtrip() {
    let mut original = Config::default();
    original.data.path = Some(PathBuf::from("/tmp/roster.json"));
    original.ui.tick_rate_ms = 125;

    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");

    assert_eq!(original.data.path, deserialized.data.path);
    assert_eq!(original.ui.tick_rate_ms, deserialized.ui.tick_rate_ms);
}

// ============================================================================
// File Loading Tests
// ============================================================================

/// Test the real user flow: write TOML, then load and validate it.
#[test]
fn test_load_from_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[ui]
tick_rate_ms = 50
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).expect("Should load config");
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert!(config.data.path.is_none());
}

/// Test that load_from reports a missing file as a read error.
#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Config::load_from(&path);
    assert!(result.is_err());

    match result.unwrap_err() {
        ConfigError::ReadError { path: err_path, .. } => {
            assert_eq!(err_path, path);
        }
        other => panic!("Expected ReadError, got: {other:?}"),
    }
}

/// Test that load_from reports malformed TOML as a parse error.
#[test]
fn test_load_from_malformed_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ui = {{{{").unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err());

    match result.unwrap_err() {
        ConfigError::ParseError { path: err_path, .. } => {
            assert_eq!(err_path, path);
        }
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

/// Test that load_from rejects a file that parses but fails validation.
#[test]
fn test_load_from_rejects_zero_tick_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[ui]
tick_rate_ms = 0
"#,
    )
    .unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err());

    match result.unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}
