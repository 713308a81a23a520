//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BindingConfig;
use super::secret::secret_string;
use crate::domain::errors::BindingError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BindingConfig
/// 4. Applies environment variable overrides (DOCDB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is not
/// set, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use docdb_binding::config::loader::load_config;
///
/// let config = load_config("docdb.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BindingConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BindingError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BindingError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: BindingConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BindingError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BindingError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut missing_vars: Vec<String> = Vec::new();

    let lines: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }

            re.replace_all(line, |cap: &regex::Captures<'_>| {
                let var_name = &cap[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    cap[0].to_string()
                })
            })
            .into_owned()
        })
        .collect();

    if !missing_vars.is_empty() {
        return Err(BindingError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using DOCDB_* prefix
///
/// Environment variables follow the pattern: DOCDB_<SECTION>_<KEY>
///
/// A boolean override that does not parse is a configuration error.
fn apply_env_overrides(config: &mut BindingConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("DOCDB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("DOCDB_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool_override("DOCDB_APPLICATION_DRY_RUN", &val)?;
    }

    // Cosmos DB overrides
    if let Ok(val) = std::env::var("DOCDB_COSMOSDB_ENDPOINT") {
        config.cosmosdb.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("DOCDB_COSMOSDB_KEY") {
        config.cosmosdb.key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("DOCDB_COSMOSDB_CONNECTION_STRING") {
        config.cosmosdb.connection_string = Some(secret_string(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DOCDB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("DOCDB_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("DOCDB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_bool_override(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(BindingError::Configuration(format!(
            "{name} must be true or false, got '{other}'"
        ))),
    }
}
