use advanced_counter::config::{Config, ConfigError, DEFAULT_STORAGE_KEY};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.counter.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.counter.storage_key, "advanced-counter-value");
    assert_eq!(config.counter.initial_step, 1);
    assert_eq!(config.persistence.debounce_ms, 500);
    assert!(!config.persistence.flush_on_exit);
    assert!(config.persistence.storage_path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("advanced-counter/config.toml"));
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[counter]
storage_key = "my-counter"
initial_step = 5

[persistence]
debounce_ms = 250
flush_on_exit = true
storage_path = "/var/tmp/counter.json"

[logging]
level = "debug"
file = "/var/tmp/counter.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.counter.storage_key, "my-counter");
    assert_eq!(config.counter.initial_step, 5);
    assert_eq!(config.persistence.debounce_ms, 250);
    assert!(config.persistence.flush_on_exit);
    assert_eq!(config.storage_path(), PathBuf::from("/var/tmp/counter.json"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.log_path(), PathBuf::from("/var/tmp/counter.log"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let (_dir, path) = write_config("[persistence]\ndebounce_ms = 1000\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.persistence.debounce_ms, 1000);
    assert_eq!(config.counter.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_file_is_default_config() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[counter\nstorage_key = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[persistence]\ndebounce_ms = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_debounce_fails_validation() {
    let (_dir, path) = write_config("[persistence]\ndebounce_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("debounce_ms"));
}

#[test]
fn test_blank_storage_key_fails_validation() {
    let mut config = Config::default();
    config.counter.storage_key = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_non_positive_initial_step_fails_validation() {
    let mut config = Config::default();
    config.counter.initial_step = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("initial_step"));
}
