//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX to avoid
//! interference between tests.

use docdb_binding::config::load_config;
use docdb_binding::domain::BindingError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("DOCDB_APPLICATION_LOG_LEVEL");
    std::env::remove_var("DOCDB_APPLICATION_DRY_RUN");
    std::env::remove_var("DOCDB_COSMOSDB_ENDPOINT");
    std::env::remove_var("DOCDB_COSMOSDB_KEY");
    std::env::remove_var("DOCDB_COSMOSDB_CONNECTION_STRING");
    std::env::remove_var("DOCDB_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("DOCDB_LOGGING_LOCAL_PATH");
    std::env::remove_var("TEST_DOCDB_COSMOS_KEY");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const COMPLETE_CONFIG: &str = r#"
[application]
log_level = "debug"
dry_run = true

[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="

[[bindings]]
database_name = "ItemDb"
collection_name = "ItemCollection"
partition_key = "/category"
collection_throughput = 1000

[[bindings]]
database_name = "ItemDb"
collection_name = "Leases"
create_if_not_exists = false

[logging]
local_enabled = false
local_path = "/tmp/docdb"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.bindings.len(), 2);

    let items = &config.bindings[0];
    assert_eq!(items.database_name.as_str(), "ItemDb");
    assert_eq!(items.partition_key_path(), Some("/category"));
    assert_eq!(items.collection_throughput, 1000);
    assert!(items.create_if_not_exists);

    let leases = &config.bindings[1];
    assert_eq!(leases.collection_throughput, 0);
    assert!(!leases.create_if_not_exists);

    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_DOCDB_COSMOS_KEY", "c3Vic3RpdHV0ZWQ=");

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_DOCDB_COSMOS_KEY}"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let account = config.cosmosdb.account().unwrap();
    assert_eq!(account.key.expose_secret(), "c3Vic3RpdHV0ZWQ=");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_reported() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_DOCDB_COSMOS_KEY}"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, BindingError::Configuration(_)));
    assert!(err.to_string().contains("TEST_DOCDB_COSMOS_KEY"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DOCDB_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("DOCDB_APPLICATION_DRY_RUN", "false");
    std::env::set_var(
        "DOCDB_COSMOSDB_ENDPOINT",
        "https://override.documents.azure.com:443/",
    );

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert!(!config.application.dry_run);
    assert_eq!(
        config.cosmosdb.account().unwrap().endpoint,
        "https://override.documents.azure.com:443/"
    );

    cleanup_env_vars();
}

#[test]
fn test_unparseable_dry_run_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DOCDB_APPLICATION_DRY_RUN", "maybe");

    let file = write_config(COMPLETE_CONFIG);
    let result = load_config(file.path());

    cleanup_env_vars();
    let err = result.unwrap_err();
    assert!(matches!(err, BindingError::Configuration(_)));
    assert!(err.to_string().contains("DOCDB_APPLICATION_DRY_RUN"));
}

#[test]
fn test_connection_string_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
connection_string = "AccountEndpoint=https://cs.documents.azure.com:443/;AccountKey=a2V5PT0=;"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let account = config.cosmosdb.account().unwrap();
    assert_eq!(account.endpoint, "https://cs.documents.azure.com:443/");
    assert_eq!(account.key.expose_secret(), "a2V5PT0=");
}

#[test]
fn test_invalid_configs_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        // http endpoint
        r#"
[cosmosdb]
endpoint = "http://test.documents.azure.com:443/"
key = "a2V5"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items"
"#,
        // no bindings
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "a2V5"
"#,
        // forbidden character in collection name
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "a2V5"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items/2024"
"#,
        // partition key without leading slash
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "a2V5"

[[bindings]]
database_name = "ItemDb"
collection_name = "Items"
partition_key = "category"
"#,
    ];

    for contents in cases {
        let file = write_config(contents);
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(BindingError::Configuration(_))),
            "expected configuration error for:\n{contents}"
        );
    }
}
