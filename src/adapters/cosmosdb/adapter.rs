//! CosmosDB adapter implementing the document database service trait

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::models::{
    DatabaseDefinition, DocumentCollection, ProvisionOutcome, RequestOptions, ResourceLink,
};
use crate::adapters::database::traits::DocumentDbService;
use crate::domain::{BindingError, Result};
use async_trait::async_trait;

/// CosmosDB implementation of [`DocumentDbService`]
pub struct CosmosDbAdapter {
    client: CosmosDbClient,
}

impl CosmosDbAdapter {
    /// Create a new CosmosDB adapter
    pub fn new(client: CosmosDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentDbService for CosmosDbAdapter {
    async fn create_database_if_not_exists(
        &self,
        database: &DatabaseDefinition,
    ) -> Result<ProvisionOutcome> {
        self.client.ensure_database_exists(database).await
    }

    async fn create_document_collection_if_not_exists(
        &self,
        database_link: &ResourceLink,
        collection: &DocumentCollection,
        options: &RequestOptions,
    ) -> Result<ProvisionOutcome> {
        let database_id = database_link.database_id().ok_or_else(|| {
            BindingError::Validation(format!(
                "'{database_link}' does not address a database"
            ))
        })?;

        self.client
            .ensure_collection_exists(database_id, collection, options)
            .await
    }

    fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}
