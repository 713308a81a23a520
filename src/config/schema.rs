//! Configuration schema types
//!
//! This module defines the configuration structure for docdb-binding.

use super::connection::{parse_connection_string, CosmosAccount};
use super::secret::SecretString;
use crate::domain::{BindingAttribute, BindingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main docdb-binding configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Cosmos DB account settings
    pub cosmosdb: CosmosDbConfig,

    /// Bindings whose resources are provisioned
    #[serde(default)]
    pub bindings: Vec<BindingAttribute>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BindingConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.cosmosdb.validate()?;

        if self.bindings.is_empty() {
            return Err("at least one [[bindings]] entry is required".to_string());
        }

        let mut seen = HashSet::new();
        for binding in &self.bindings {
            binding.validate()?;
            if !seen.insert((&binding.database_name, &binding.collection_name)) {
                return Err(format!(
                    "binding for {}/{} is declared more than once",
                    binding.database_name, binding.collection_name
                ));
            }
        }

        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (log requests instead of sending them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Azure Cosmos DB account configuration
///
/// The account is given either as `endpoint` + `key` or as a
/// `connection_string`, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CosmosDbConfig {
    /// Cosmos DB endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Cosmos DB account key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<SecretString>,

    /// Account connection string (`AccountEndpoint=...;AccountKey=...;`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<SecretString>,
}

impl CosmosDbConfig {
    /// Resolve the account endpoint and key
    ///
    /// # Errors
    ///
    /// Returns a configuration error if both or neither credential forms are
    /// given, or if a part is missing.
    pub fn account(&self) -> Result<CosmosAccount> {
        let uses_parts = self.endpoint.is_some() || self.key.is_some();

        match (&self.connection_string, uses_parts) {
            (Some(_), true) => Err(BindingError::Configuration(
                "cosmosdb.connection_string cannot be combined with endpoint/key".to_string(),
            )),
            (Some(connection_string), false) => parse_connection_string(connection_string),
            (None, _) => {
                let endpoint = self.endpoint.clone().ok_or_else(|| {
                    BindingError::Configuration(
                        "cosmosdb.endpoint or cosmosdb.connection_string is required".to_string(),
                    )
                })?;
                let key = self.key.clone().ok_or_else(|| {
                    BindingError::Configuration("cosmosdb.key is required".to_string())
                })?;
                Ok(CosmosAccount { endpoint, key })
            }
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        self.account().map_err(|e| e.to_string())?.validate()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
