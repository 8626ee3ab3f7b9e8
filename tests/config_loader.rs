use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vitrina::config::{Config, ConfigError};

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.catalog.data_file.is_none());
    assert_eq!(config.catalog.latency_ms, 0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.currency, "₽");
    assert_eq!(config.ui.fallback_swatch, "#808080");
    assert_eq!(config.ui.swatches.get("черный").map(String::as_str), Some("#000000"));
    assert_eq!(config.ui.swatches.len(), 5);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("vitrina/config.toml"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_keys() {
    let (_dir, path) = write_config(
        r#"
[catalog]
data_file = "/srv/catalog.json"
latency_ms = 300

[ui]
currency = "RUB"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.data_file, Some(PathBuf::from("/srv/catalog.json")));
    assert_eq!(config.catalog.latency_ms, 300);
    assert_eq!(config.ui.currency, "RUB");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.swatches.len(), 5);
}

#[test]
fn test_custom_swatches_replace_defaults() {
    let (_dir, path) = write_config(
        r##"
[ui.swatches]
"красный" = "#ff0000"
"##,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.swatches.len(), 1);
    assert_eq!(config.ui.swatches["красный"], "#ff0000");
}

#[test]
fn test_invalid_swatch_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[ui.swatches]
"красный" = "red"
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("красный"));
        }
        other => panic!("Expected ValidationError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_signed_hex_swatch_fails_validation() {
    let (_dir, path) = write_config("[ui]\nfallback_swatch = \"#+f+f+f\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ncurrency = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_logging_file_is_read() {
    let (_dir, path) = write_config("[logging]\nfile = \"/tmp/vitrina.log\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/vitrina.log")));
}
