// docdb-binding - Cosmos DB binding provisioning
// Copyright (c) 2025 docdb-binding Contributors
// Licensed under the MIT License

//! # docdb-binding
//!
//! Helpers a job-processing framework uses when binding to Azure Cosmos DB
//! documents:
//!
//! - **Provisioning**: ensure a binding's database and collection exist before
//!   any document operation, with an optional partition key and a throughput
//!   floor of 400 RU/s when none is configured.
//! - **Error classification**: recognize failures raised by the document
//!   database client, directly or wrapped one level deep in an aggregate, so
//!   retry logic can inspect status codes and retry-after hints.
//!
//! ## Architecture
//!
//! - [`core`] - Provisioning, classification, binding context
//! - [`adapters`] - Document database service trait and its Cosmos DB implementation
//! - [`domain`] - Resource ids, binding attribute, error types
//! - [`config`] - TOML configuration
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docdb_binding::adapters::database::create_document_db_service;
//! use docdb_binding::config::load_config;
//! use docdb_binding::core::{initialize_binding, BindingContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("docdb.toml")?;
//!     let service = create_document_db_service(&config.cosmosdb, false)?;
//!
//!     for attribute in &config.bindings {
//!         let context = BindingContext::new(service.clone(), attribute.clone());
//!         if let Some(report) = initialize_binding(&context).await? {
//!             println!("{}/{} ready", report.database, report.collection);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use docdb_binding::core::classify::try_get_document_client_error;
//! use docdb_binding::domain::{BindingError, DocumentClientError};
//! use std::time::Duration;
//!
//! let err = BindingError::from(
//!     DocumentClientError::with_status(429, "Request rate is large")
//!         .retry_after(Duration::from_millis(500)),
//! );
//!
//! if let Some(client_err) = try_get_document_client_error(&err) {
//!     assert!(client_err.is_throttled());
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
