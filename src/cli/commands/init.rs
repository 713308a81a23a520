//! Init command implementation
//!
//! Writes a sample configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Sample configuration written by `init`
pub const SAMPLE_CONFIG: &str = r#"# docdb-binding configuration

[application]
log_level = "info"
dry_run = false

[cosmosdb]
endpoint = "https://your-account.documents.azure.com:443/"
key = "${DOCDB_COSMOS_KEY}"
# Alternatively, replace endpoint and key with:
# connection_string = "${DOCDB_COSMOS_CONNECTION_STRING}"

[[bindings]]
database_name = "ItemDb"
collection_name = "ItemCollection"
# partition_key = "/category"
# 0 requests the minimum of 400 RU/s
collection_throughput = 0
create_if_not_exists = true
# environment variable holding this binding's account connection string
# connection_string_setting = "ITEMS_COSMOSDB_CONNECTION"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "docdb.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your account and bindings", self.output);
                println!("  2. Set DOCDB_COSMOS_KEY in your environment or a .env file");
                println!("  3. Validate configuration: docdb-binding validate-config");
                println!("  4. Provision resources: docdb-binding provision");
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }
}
