//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for docdb-binding using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// docdb-binding - Cosmos DB binding provisioning tool
#[derive(Parser, Debug)]
#[command(name = "docdb-binding")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docdb.toml", env = "DOCDB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCDB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure the databases and collections of all bindings exist
    Provision(commands::provision::ProvisionArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_provision() {
        let cli = Cli::parse_from(["docdb-binding", "provision"]);
        assert_eq!(cli.config, "docdb.toml");
        assert!(matches!(cli.command, Commands::Provision(_)));
    }

    #[test]
    fn test_cli_parse_provision_flags() {
        let cli = Cli::parse_from(["docdb-binding", "provision", "--dry-run", "--json"]);
        let Commands::Provision(args) = cli.command else {
            panic!("expected provision command");
        };
        assert!(args.dry_run);
        assert!(args.json);
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "docdb-binding",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["docdb-binding", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
