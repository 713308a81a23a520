//! External system integrations for docdb-binding.
//!
//! - [`database`] - Document database abstraction layer (trait-based)
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//!
//! # Design Pattern
//!
//! Adapters isolate the SDK behind the [`database::DocumentDbService`] trait so
//! provisioning can run against the real service, a dry-run service, or a
//! test double.
//!
//! ```rust,no_run
//! use docdb_binding::adapters::database::create_document_db_service;
//! use docdb_binding::config::{secret_string, CosmosDbConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmosDbConfig {
//!     endpoint: Some("https://account.documents.azure.com:443/".to_string()),
//!     key: Some(secret_string("key".to_string())),
//!     connection_string: None,
//! };
//!
//! let service = create_document_db_service(&config, false)?;
//! println!("Connected to {}", service.endpoint());
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod database;
