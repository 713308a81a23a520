//! Dry-run document database service
//!
//! Logs the requests a real service would receive and reports every resource
//! as created. Nothing is sent over the network.

use super::models::{
    DatabaseDefinition, DocumentCollection, ProvisionOutcome, RequestOptions, ResourceLink,
};
use super::traits::DocumentDbService;
use crate::domain::Result;
use async_trait::async_trait;

/// Service that only logs what it would create
#[derive(Debug, Clone)]
pub struct DryRunService {
    endpoint: String,
}

impl DryRunService {
    /// Create a dry-run service for an account endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DocumentDbService for DryRunService {
    async fn create_database_if_not_exists(
        &self,
        database: &DatabaseDefinition,
    ) -> Result<ProvisionOutcome> {
        tracing::info!(
            endpoint = %self.endpoint,
            database = %database.id,
            "DRY RUN: Would create database if it does not exist"
        );
        Ok(ProvisionOutcome::Created)
    }

    async fn create_document_collection_if_not_exists(
        &self,
        database_link: &ResourceLink,
        collection: &DocumentCollection,
        options: &RequestOptions,
    ) -> Result<ProvisionOutcome> {
        tracing::info!(
            endpoint = %self.endpoint,
            database_link = %database_link,
            collection = %collection.id,
            partition_key_paths = ?collection.partition_key.paths,
            offer_throughput = ?options.offer_throughput,
            "DRY RUN: Would create collection if it does not exist"
        );
        Ok(ProvisionOutcome::Created)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
