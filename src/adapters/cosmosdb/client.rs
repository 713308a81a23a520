//! Cosmos DB client implementation
//!
//! This module provides the client for creating databases and collections in
//! Azure Cosmos DB through the `azure_data_cosmos` SDK.

use crate::adapters::database::models::{
    DatabaseDefinition, DocumentCollection, ProvisionOutcome, RequestOptions,
};
use crate::config::CosmosAccount;
use crate::domain::{BindingError, DocumentClientError, Result};
use azure_core::credentials::Secret;
use azure_core::error::ErrorKind;
use azure_core::http::headers::{HeaderName, Headers, X_MS_RETRY_AFTER_MS};
use azure_data_cosmos::constants::SUB_STATUS;
use azure_data_cosmos::models::{
    ContainerProperties, IndexingPolicy, PartitionKeyDefinition, PartitionKeyKind,
    ThroughputProperties,
};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions, CreateContainerOptions};
use std::borrow::Cow;
use std::str::FromStr;
use std::time::Duration;

const ACTIVITY_ID: HeaderName = HeaderName::from_static("x-ms-activity-id");

/// Cosmos DB client for docdb-binding
///
/// Creates databases and collections with read-then-create semantics. A
/// conflict on create means a concurrent caller won the race and is reported
/// as [`ProvisionOutcome::AlreadyExists`].
pub struct CosmosDbClient {
    /// Cosmos DB client
    client: CosmosClient,

    /// Account endpoint
    endpoint: String,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created from the account settings.
    pub fn new(account: &CosmosAccount) -> Result<Self> {
        use secrecy::ExposeSecret;

        let key_str: String = account.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&account.endpoint, key, options).map_err(|e| {
            BindingError::Configuration(format!("Failed to create Cosmos client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: account.endpoint.clone(),
        })
    }

    /// Ensure the database exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns the service error if the database cannot be read or created.
    pub async fn ensure_database_exists(
        &self,
        database: &DatabaseDefinition,
    ) -> Result<ProvisionOutcome> {
        let database_client = self.client.database_client(database.id.as_str());

        match database_client.read(None).await {
            Ok(_) => {
                tracing::debug!(database = %database.id, "Database already exists");
                return Ok(ProvisionOutcome::AlreadyExists);
            }
            Err(e) => {
                let error = document_client_error(&e);
                if !error.is_not_found() {
                    return Err(error.into());
                }
            }
        }

        tracing::info!(database = %database.id, "Creating database");

        match self.client.create_database(database.id.as_str(), None).await {
            Ok(_) => {
                tracing::info!(database = %database.id, "Database created successfully");
                Ok(ProvisionOutcome::Created)
            }
            Err(e) => resolve_create_conflict(document_client_error(&e)),
        }
    }

    /// Ensure a collection exists in a database, creating it if necessary
    ///
    /// The partition key paths and offer throughput are passed to the service
    /// unchanged; the service rejects values it does not accept.
    ///
    /// # Errors
    ///
    /// Returns the service error if the collection cannot be read or created.
    pub async fn ensure_collection_exists(
        &self,
        database_id: &str,
        collection: &DocumentCollection,
        options: &RequestOptions,
    ) -> Result<ProvisionOutcome> {
        let database_client = self.client.database_client(database_id);
        let container = database_client.container_client(collection.id.as_str());

        match container.read(None).await {
            Ok(_) => {
                tracing::debug!(
                    database = %database_id,
                    collection = %collection.id,
                    "Collection already exists"
                );
                return Ok(ProvisionOutcome::AlreadyExists);
            }
            Err(e) => {
                let error = document_client_error(&e);
                if !error.is_not_found() {
                    return Err(error.into());
                }
            }
        }

        tracing::info!(
            database = %database_id,
            collection = %collection.id,
            "Creating collection"
        );

        let properties = ContainerProperties {
            id: Cow::Owned(collection.id.as_str().to_string()),
            partition_key: PartitionKeyDefinition {
                paths: collection.partition_key.paths.clone(),
                kind: PartitionKeyKind::Hash,
                version: None,
            },
            indexing_policy: Some(IndexingPolicy::default()),
            ..Default::default()
        };

        let create_options = options.offer_throughput.map(|throughput| CreateContainerOptions {
            throughput: Some(ThroughputProperties::manual(throughput as usize)),
            ..Default::default()
        });

        match database_client
            .create_container(properties, create_options)
            .await
        {
            Ok(_) => {
                tracing::info!(
                    database = %database_id,
                    collection = %collection.id,
                    offer_throughput = ?options.offer_throughput,
                    "Collection created successfully"
                );
                Ok(ProvisionOutcome::Created)
            }
            Err(e) => resolve_create_conflict(document_client_error(&e)),
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn resolve_create_conflict(error: DocumentClientError) -> Result<ProvisionOutcome> {
    if error.is_conflict() {
        tracing::debug!("Resource was created concurrently");
        Ok(ProvisionOutcome::AlreadyExists)
    } else {
        Err(error.into())
    }
}

/// Convert an SDK error into a [`DocumentClientError`]
///
/// Only an HTTP response error carries a status; transport failures keep
/// their message and have none.
pub(crate) fn document_client_error(error: &azure_core::Error) -> DocumentClientError {
    let message = error.to_string();

    let ErrorKind::HttpResponse {
        status,
        raw_response,
        ..
    } = error.kind()
    else {
        return DocumentClientError::new(message);
    };

    let mut client_error = DocumentClientError::with_status(u16::from(*status), message);
    if let Some(response) = raw_response {
        client_error = with_response_headers(client_error, response.headers());
    }
    client_error
}

fn with_response_headers(mut error: DocumentClientError, headers: &Headers) -> DocumentClientError {
    if let Some(sub_status) = header_as::<u32>(headers, &SUB_STATUS) {
        error = error.sub_status(sub_status);
    }
    if let Some(millis) = header_as::<f64>(headers, &X_MS_RETRY_AFTER_MS) {
        if millis.is_finite() && millis >= 0.0 {
            error = error.retry_after(Duration::from_secs_f64(millis / 1000.0));
        }
    }
    if let Some(activity_id) = headers.get_optional_str(&ACTIVITY_ID) {
        error = error.activity_id(activity_id);
    }
    error
}

fn header_as<T: FromStr>(headers: &Headers, name: &HeaderName) -> Option<T> {
    headers
        .get_optional_str(name)
        .and_then(|value| value.trim().parse().ok())
}
