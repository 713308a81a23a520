//! Logging and observability
//!
//! Structured logging through `tracing`, with a console layer and an optional
//! rolling JSON file layer.
//!
//! # Example
//!
//! ```no_run
//! use docdb_binding::logging::init_logging;
//! use docdb_binding::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(database = "ItemDb", "Provisioning started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a provisioning call
///
/// # Example
///
/// ```no_run
/// use docdb_binding::log_provision_start;
///
/// log_provision_start!("ItemDb", "ItemCollection");
/// ```
#[macro_export]
macro_rules! log_provision_start {
    ($database:expr, $collection:expr) => {
        tracing::info!(
            database = %$database,
            collection = %$collection,
            "Ensuring database and collection exist"
        );
    };
}

/// Log the completion of a provisioning call
///
/// # Example
///
/// ```no_run
/// use docdb_binding::log_provision_complete;
/// use std::time::Duration;
///
/// log_provision_complete!("ItemDb", "ItemCollection", Duration::from_millis(250));
/// ```
#[macro_export]
macro_rules! log_provision_complete {
    ($database:expr, $collection:expr, $duration:expr) => {
        tracing::info!(
            database = %$database,
            collection = %$collection,
            duration_ms = $duration.as_millis() as u64,
            "Database and collection ready"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use docdb_binding::log_error_with_context;
/// use docdb_binding::domain::BindingError;
///
/// let error = BindingError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
