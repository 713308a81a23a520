//! Document database service trait
//!
//! This module defines the client capability the provisioning helpers are
//! written against. Implementations decide how "if not exists" is detected;
//! callers only rely on both operations being idempotent.

use super::models::{
    DatabaseDefinition, DocumentCollection, ProvisionOutcome, RequestOptions, ResourceLink,
};
use crate::domain::Result;
use async_trait::async_trait;

/// Document database client capability
///
/// Errors raised by the service are returned as
/// [`BindingError::DocumentClient`](crate::domain::BindingError::DocumentClient).
#[async_trait]
pub trait DocumentDbService: Send + Sync {
    /// Create a database unless one with the same id exists
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the request.
    async fn create_database_if_not_exists(
        &self,
        database: &DatabaseDefinition,
    ) -> Result<ProvisionOutcome>;

    /// Create a collection in a database unless one with the same id exists
    ///
    /// # Arguments
    ///
    /// * `database_link` - Link of the database holding the collection
    /// * `collection` - Collection definition, including its partition key
    /// * `options` - Request options, including the offer throughput
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the request, for example when
    /// the throughput is below the minimum for the collection's configuration.
    async fn create_document_collection_if_not_exists(
        &self,
        database_link: &ResourceLink,
        collection: &DocumentCollection,
        options: &RequestOptions,
    ) -> Result<ProvisionOutcome>;

    /// Account endpoint this service talks to
    fn endpoint(&self) -> &str;
}
