//! Account connection string parsing
//!
//! Parses the `AccountEndpoint=...;AccountKey=...;` form the Azure portal
//! hands out. Keys are matched case-insensitively and unknown keys are ignored.

use super::secret::{secret_string, SecretString};
use crate::domain::{BindingError, Result};
use secrecy::ExposeSecret;

/// Endpoint and key of a Cosmos DB account
#[derive(Debug, Clone)]
pub struct CosmosAccount {
    /// Account endpoint URL
    pub endpoint: String,

    /// Account key
    pub key: SecretString,
}

impl CosmosAccount {
    /// Check that the endpoint is an https URL and the key is not blank
    pub fn validate(&self) -> std::result::Result<(), String> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| format!("cosmosdb endpoint '{}' is not a URL: {e}", self.endpoint))?;
        if url.scheme() != "https" {
            return Err("cosmosdb endpoint must start with https://".to_string());
        }

        if self.key.expose_secret().is_blank() {
            return Err("cosmosdb key cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Resolve the account named by a binding's connection string setting
///
/// The setting is the name of an environment variable holding an account
/// connection string.
///
/// # Errors
///
/// Returns a configuration error if the variable is unset or empty, or if its
/// value is not a valid connection string for an https endpoint.
pub fn account_from_setting(setting: &str) -> Result<CosmosAccount> {
    let raw = std::env::var(setting)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            BindingError::Configuration(format!(
                "Connection string setting '{setting}' is not set"
            ))
        })?;

    let account = parse_connection_string(&secret_string(raw)).map_err(|e| {
        BindingError::Configuration(format!("Connection string setting '{setting}': {e}"))
    })?;
    account.validate().map_err(|e| {
        BindingError::Configuration(format!("Connection string setting '{setting}': {e}"))
    })?;

    Ok(account)
}

/// Parse an account connection string
///
/// # Examples
///
/// ```
/// use docdb_binding::config::{parse_connection_string, secret_string};
///
/// let conn = secret_string(
///     "AccountEndpoint=https://acct.documents.azure.com:443/;AccountKey=a2V5;".to_string(),
/// );
/// let account = parse_connection_string(&conn).unwrap();
/// assert_eq!(account.endpoint, "https://acct.documents.azure.com:443/");
/// ```
///
/// # Errors
///
/// Returns a configuration error if the endpoint or key is missing.
pub fn parse_connection_string(connection_string: &SecretString) -> Result<CosmosAccount> {
    let raw: &str = connection_string.expose_secret().as_ref();
    let mut endpoint = None;
    let mut key = None;

    for part in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        // keys may contain '=' padding, only split on the first one
        let Some((name, value)) = part.split_once('=') else {
            return Err(BindingError::Configuration(
                "Malformed connection string segment, expected Name=Value".to_string(),
            ));
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "accountendpoint" => endpoint = Some(value.trim().to_string()),
            "accountkey" => key = Some(secret_string(value.trim().to_string())),
            _ => {}
        }
    }

    let endpoint = endpoint.filter(|e| !e.is_empty()).ok_or_else(|| {
        BindingError::Configuration("Connection string is missing AccountEndpoint".to_string())
    })?;
    let key = key
        .filter(|k| !k.expose_secret().is_blank())
        .ok_or_else(|| {
            BindingError::Configuration("Connection string is missing AccountKey".to_string())
        })?;

    Ok(CosmosAccount { endpoint, key })
}
