//! Core binding logic
//!
//! - [`provision`] - Ensures a binding's database and collection exist
//! - [`classify`] - Recognizes errors raised by the document database client
//! - [`context`] - Service handle plus resolved binding attribute
//!
//! ```rust,no_run
//! use docdb_binding::core::classify::try_get_document_client_error;
//! use docdb_binding::core::provision::create_database_and_collection_if_not_exist;
//! use docdb_binding::adapters::database::DocumentDbService;
//! use docdb_binding::domain::{CollectionName, DatabaseName};
//!
//! # async fn example(service: &dyn DocumentDbService) -> Result<(), Box<dyn std::error::Error>> {
//! let database = DatabaseName::new("ItemDb")?;
//! let collection = CollectionName::new("ItemCollection")?;
//!
//! match create_database_and_collection_if_not_exist(service, &database, &collection, Some("/id"), 0).await {
//!     Ok(report) => println!("Collection {}", report.collection_outcome),
//!     Err(e) => match try_get_document_client_error(&e) {
//!         Some(client_err) => println!("Service rejected request: {:?}", client_err.status_code),
//!         None => return Err(e.into()),
//!     },
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod context;
pub mod provision;

pub use classify::{
    find_document_client_error, is_document_client_error, try_get_document_client_error,
};
pub use context::BindingContext;
pub use provision::{
    create_database_and_collection_if_not_exist, create_database_and_collection_if_not_exist_for,
    effective_throughput, initialize_binding, ProvisionReport, MINIMUM_COLLECTION_THROUGHPUT,
};
