//! Provision command implementation
//!
//! Ensures the database and collection of every configured binding exist.

use super::{EXIT_CONFIG_ERROR, EXIT_DOCUMENT_CLIENT_ERROR, EXIT_FATAL, EXIT_OK};
use crate::adapters::database::{create_binding_service, DocumentDbService};
use crate::config::load_config;
use crate::core::classify::try_get_document_client_error;
use crate::core::provision::{initialize_binding, ProvisionReport};
use crate::core::BindingContext;
use crate::domain::BindingError;
use crate::log_error_with_context;
use clap::Args;
use std::collections::HashMap;
use std::sync::Arc;

/// Arguments for the provision command
#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Log the create requests instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the provisioning reports as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProvisionArgs {
    /// Execute the provision command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Provisioning binding resources");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let dry_run = self.dry_run || config.application.dry_run;

        // one service per account, keyed by connection string setting
        let mut services: HashMap<Option<String>, Arc<dyn DocumentDbService>> = HashMap::new();
        let mut reports: Vec<ProvisionReport> = Vec::new();
        for attribute in &config.bindings {
            let key = attribute.connection_string_setting.clone();
            let service = match services.get(&key) {
                Some(service) => service.clone(),
                None => match create_binding_service(&config.cosmosdb, attribute, dry_run) {
                    Ok(service) => {
                        services.insert(key, service.clone());
                        service
                    }
                    Err(e) => {
                        log_error_with_context!(&e, "Failed to create document service");
                        eprintln!(
                            "❌ {}/{}: failed to create document service: {e}",
                            attribute.database_name, attribute.collection_name
                        );
                        return Ok(EXIT_CONFIG_ERROR);
                    }
                },
            };

            let context = BindingContext::new(service, attribute.clone());

            match initialize_binding(&context).await {
                Ok(Some(report)) => {
                    if !self.json {
                        println!(
                            "✅ {}/{}: database {}, collection {} ({} RU/s)",
                            report.database,
                            report.collection,
                            report.database_outcome,
                            report.collection_outcome,
                            report.throughput
                        );
                    }
                    reports.push(report);
                }
                Ok(None) => {
                    if !self.json {
                        println!(
                            "⏭️  {}/{}: create_if_not_exists is disabled",
                            attribute.database_name, attribute.collection_name
                        );
                    }
                }
                Err(e) => {
                    log_error_with_context!(&e, "Provisioning failed");
                    eprintln!(
                        "❌ {}/{}: {e}",
                        attribute.database_name, attribute.collection_name
                    );
                    return Ok(exit_code_for(&e));
                }
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }

        Ok(EXIT_OK)
    }
}

/// Map a provisioning failure to a process exit code
fn exit_code_for(error: &BindingError) -> i32 {
    match try_get_document_client_error(error) {
        Some(client_error) => {
            if let Some(retry_after) = client_error.retry_after {
                eprintln!("   Service asked to retry after {}ms", retry_after.as_millis());
            }
            EXIT_DOCUMENT_CLIENT_ERROR
        }
        None => EXIT_FATAL,
    }
}
