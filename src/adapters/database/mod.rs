//! Document database abstraction layer
//!
//! This module provides the trait the provisioning helpers are written
//! against, its request models, and a dry-run implementation.

pub mod dry_run;
pub mod factory;
pub mod models;
pub mod traits;

pub use dry_run::DryRunService;
pub use factory::{create_binding_service, create_document_db_service};
pub use models::{
    DatabaseDefinition, DocumentCollection, PartitionKeySpec, ProvisionOutcome, RequestOptions,
    ResourceLink,
};
pub use traits::DocumentDbService;
