//! Validate config command implementation

use super::{EXIT_CONFIG_ERROR, EXIT_OK};
use crate::config::load_config;
use crate::core::provision::effective_throughput;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let account = match config.cosmosdb.account() {
            Ok(a) => a,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Cosmos DB Endpoint: {}", account.endpoint);
        println!("  Bindings:");
        for binding in &config.bindings {
            println!(
                "    - {}/{} partition_key={} throughput={} create_if_not_exists={}",
                binding.database_name,
                binding.collection_name,
                binding.partition_key_path().unwrap_or("(none)"),
                effective_throughput(binding.collection_throughput),
                binding.create_if_not_exists
            );
        }
        println!();

        Ok(EXIT_OK)
    }
}
