//! Database and collection provisioning
//!
//! Ensures a binding's database and collection exist before documents are
//! read or written. Both steps rely on the service's idempotent
//! create-if-not-exists calls; nothing is cached or coordinated here, and
//! service errors are returned unchanged.

use crate::adapters::database::models::{
    DatabaseDefinition, DocumentCollection, ProvisionOutcome, RequestOptions, ResourceLink,
};
use crate::adapters::database::traits::DocumentDbService;
use crate::core::context::BindingContext;
use crate::domain::{CollectionName, DatabaseName, Result};
use crate::{log_provision_complete, log_provision_start};
use serde::Serialize;
use std::time::Instant;

/// Throughput requested for a collection when none is configured
pub const MINIMUM_COLLECTION_THROUGHPUT: u32 = 400;

/// What a provisioning call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    /// Database that was ensured
    pub database: DatabaseName,

    /// Collection that was ensured
    pub collection: CollectionName,

    /// Outcome of the database step
    pub database_outcome: ProvisionOutcome,

    /// Outcome of the collection step
    pub collection_outcome: ProvisionOutcome,

    /// Partition key path attached to the collection definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,

    /// Throughput requested for the collection
    pub throughput: u32,
}

/// Throughput to request for a configured value; 0 selects the minimum
///
/// # Examples
///
/// ```
/// use docdb_binding::core::provision::{effective_throughput, MINIMUM_COLLECTION_THROUGHPUT};
///
/// assert_eq!(effective_throughput(0), MINIMUM_COLLECTION_THROUGHPUT);
/// assert_eq!(effective_throughput(1000), 1000);
/// ```
pub fn effective_throughput(throughput: u32) -> u32 {
    if throughput == 0 {
        MINIMUM_COLLECTION_THROUGHPUT
    } else {
        throughput
    }
}

/// Prepare a binding's resources during binding setup
///
/// Returns `Ok(None)` without contacting the service when the binding does
/// not ask for missing resources to be created.
///
/// # Errors
///
/// Returns the service error of whichever step failed.
pub async fn initialize_binding(context: &BindingContext) -> Result<Option<ProvisionReport>> {
    let attribute = &context.resolved_attribute;
    if !attribute.create_if_not_exists {
        tracing::debug!(
            database = %attribute.database_name,
            collection = %attribute.collection_name,
            "create_if_not_exists disabled, skipping provisioning"
        );
        return Ok(None);
    }

    create_database_and_collection_if_not_exist_for(context)
        .await
        .map(Some)
}

/// Ensure the binding's database and collection exist
///
/// Forwards the resolved attribute of `context` to
/// [`create_database_and_collection_if_not_exist`].
///
/// # Errors
///
/// Returns the service error of whichever step failed.
pub async fn create_database_and_collection_if_not_exist_for(
    context: &BindingContext,
) -> Result<ProvisionReport> {
    let attribute = &context.resolved_attribute;
    create_database_and_collection_if_not_exist(
        context.service.as_ref(),
        &attribute.database_name,
        &attribute.collection_name,
        attribute.partition_key.as_deref(),
        attribute.collection_throughput,
    )
    .await
}

/// Ensure a database and a collection within it exist
///
/// The database is ensured first; the collection is only attempted once the
/// database call has succeeded.
///
/// # Arguments
///
/// * `service` - Document database service
/// * `database_name` - Database to ensure
/// * `collection_name` - Collection to ensure inside the database
/// * `partition_key` - Partition key path; `None` or empty leaves the collection unpartitioned
/// * `throughput` - Collection throughput; 0 requests [`MINIMUM_COLLECTION_THROUGHPUT`]
///
/// # Errors
///
/// Returns the service error of whichever step failed, for example when the
/// throughput is below what the service allows for the collection.
pub async fn create_database_and_collection_if_not_exist(
    service: &dyn DocumentDbService,
    database_name: &DatabaseName,
    collection_name: &CollectionName,
    partition_key: Option<&str>,
    throughput: u32,
) -> Result<ProvisionReport> {
    log_provision_start!(database_name, collection_name);
    let started = Instant::now();

    let database_outcome = service
        .create_database_if_not_exists(&DatabaseDefinition::new(database_name.clone()))
        .await?;

    let (collection_outcome, throughput) = create_document_collection_if_not_exists(
        service,
        database_name,
        collection_name,
        partition_key,
        throughput,
    )
    .await?;

    log_provision_complete!(database_name, collection_name, started.elapsed());

    Ok(ProvisionReport {
        database: database_name.clone(),
        collection: collection_name.clone(),
        database_outcome,
        collection_outcome,
        partition_key: partition_key
            .filter(|path| !path.is_empty())
            .map(str::to_string),
        throughput,
    })
}

async fn create_document_collection_if_not_exists(
    service: &dyn DocumentDbService,
    database_name: &DatabaseName,
    collection_name: &CollectionName,
    partition_key: Option<&str>,
    throughput: u32,
) -> Result<(ProvisionOutcome, u32)> {
    let database_link = ResourceLink::database(database_name);

    let mut collection = DocumentCollection::new(collection_name.clone());
    if let Some(path) = partition_key.filter(|path| !path.is_empty()) {
        collection.partition_key.paths.push(path.to_string());
    }

    let throughput = effective_throughput(throughput);
    let options = RequestOptions {
        offer_throughput: Some(throughput),
    };

    let outcome = service
        .create_document_collection_if_not_exists(&database_link, &collection, &options)
        .await?;

    Ok((outcome, throughput))
}
