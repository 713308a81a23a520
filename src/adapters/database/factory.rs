//! Document database service factory
//!
//! This module creates the service implementation selected by configuration.

use crate::adapters::cosmosdb::adapter::CosmosDbAdapter;
use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::dry_run::DryRunService;
use crate::adapters::database::traits::DocumentDbService;
use crate::config::connection::{account_from_setting, CosmosAccount};
use crate::config::schema::CosmosDbConfig;
use crate::domain::{BindingAttribute, Result};
use std::sync::Arc;

/// Create a document database service from configuration
///
/// When `dry_run` is set, a [`DryRunService`] is returned and no SDK client
/// is constructed.
///
/// # Errors
///
/// Returns an error if the account settings cannot be resolved or the client
/// cannot be created.
pub fn create_document_db_service(
    config: &CosmosDbConfig,
    dry_run: bool,
) -> Result<Arc<dyn DocumentDbService>> {
    service_for_account(config.account()?, dry_run)
}

/// Create the service a binding provisions through
///
/// A binding with `connection_string_setting` uses the account held by that
/// environment variable; any other binding uses the `[cosmosdb]` account.
///
/// # Errors
///
/// Returns an error if the binding's account cannot be resolved or the client
/// cannot be created.
pub fn create_binding_service(
    config: &CosmosDbConfig,
    attribute: &BindingAttribute,
    dry_run: bool,
) -> Result<Arc<dyn DocumentDbService>> {
    match attribute.connection_string_setting.as_deref() {
        Some(setting) => {
            tracing::debug!(
                database = %attribute.database_name,
                collection = %attribute.collection_name,
                setting = %setting,
                "Resolving binding account from connection string setting"
            );
            service_for_account(account_from_setting(setting)?, dry_run)
        }
        None => create_document_db_service(config, dry_run),
    }
}

fn service_for_account(account: CosmosAccount, dry_run: bool) -> Result<Arc<dyn DocumentDbService>> {
    if dry_run {
        tracing::info!(endpoint = %account.endpoint, "Creating dry-run document service");
        return Ok(Arc::new(DryRunService::new(account.endpoint)));
    }

    tracing::info!(endpoint = %account.endpoint, "Creating CosmosDB client");
    let client = CosmosDbClient::new(&account)?;

    Ok(Arc::new(CosmosDbAdapter::new(client)) as Arc<dyn DocumentDbService>)
}
