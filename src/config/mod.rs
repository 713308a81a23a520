//! Configuration management for docdb-binding.
//!
//! docdb-binding uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DOCDB_*` environment variable overrides
//! - Account credentials as endpoint + key or as a connection string
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`CosmosDbConfig`] - Account endpoint and credentials
//! - `[[bindings]]` - One [`BindingAttribute`](crate::domain::BindingAttribute) per binding
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${DOCDB_COSMOS_KEY}"
//!
//! [[bindings]]
//! database_name = "ItemDb"
//! collection_name = "ItemCollection"
//! partition_key = "/category"
//! collection_throughput = 0
//! ```
//!
//! ```rust,no_run
//! use docdb_binding::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docdb.toml")?;
//! for binding in &config.bindings {
//!     println!("{}/{}", binding.database_name, binding.collection_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use connection::{account_from_setting, parse_connection_string, CosmosAccount};
pub use loader::load_config;
pub use schema::{ApplicationConfig, BindingConfig, CosmosDbConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
