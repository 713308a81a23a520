//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so a single
//! test here calls `init_logging`.

use docdb_binding::config::LoggingConfig;
use docdb_binding::domain::BindingError;
use docdb_binding::logging::init_logging;
use docdb_binding::{log_error_with_context, log_provision_complete, log_provision_start};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_directory_and_rejects_reinit() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.is_dir());

    log_provision_start!("ItemDb", "Items");
    log_provision_complete!("ItemDb", "Items", Duration::from_millis(12));
    log_error_with_context!(
        &BindingError::Validation("example".to_string()),
        "logging test"
    );

    let second = init_logging("info", &LoggingConfig::default());
    assert!(matches!(second, Err(BindingError::Configuration(_))));

    drop(guard);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(result.is_err());
}
