//! Integration tests for database and collection provisioning
//!
//! A recording service stands in for Cosmos DB and captures every request in
//! the order it was made.

use async_trait::async_trait;
use docdb_binding::adapters::database::{
    DatabaseDefinition, DocumentCollection, DocumentDbService, ProvisionOutcome, RequestOptions,
    ResourceLink,
};
use docdb_binding::core::classify::try_get_document_client_error;
use docdb_binding::core::provision::{
    create_database_and_collection_if_not_exist, create_database_and_collection_if_not_exist_for,
    initialize_binding, MINIMUM_COLLECTION_THROUGHPUT,
};
use docdb_binding::core::BindingContext;
use docdb_binding::domain::{
    BindingAttribute, BindingError, CollectionName, DatabaseName, DocumentClientError, Result,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreateDatabase(DatabaseDefinition),
    CreateCollection {
        database_link: ResourceLink,
        collection: DocumentCollection,
        options: RequestOptions,
    },
}

#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<Call>>,
    database_error: Option<DocumentClientError>,
    collection_error: Option<DocumentClientError>,
    existing: bool,
}

impl RecordingService {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self) -> ProvisionOutcome {
        if self.existing {
            ProvisionOutcome::AlreadyExists
        } else {
            ProvisionOutcome::Created
        }
    }
}

#[async_trait]
impl DocumentDbService for RecordingService {
    async fn create_database_if_not_exists(
        &self,
        database: &DatabaseDefinition,
    ) -> Result<ProvisionOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateDatabase(database.clone()));
        match &self.database_error {
            Some(e) => Err(e.clone().into()),
            None => Ok(self.outcome()),
        }
    }

    async fn create_document_collection_if_not_exists(
        &self,
        database_link: &ResourceLink,
        collection: &DocumentCollection,
        options: &RequestOptions,
    ) -> Result<ProvisionOutcome> {
        self.calls.lock().unwrap().push(Call::CreateCollection {
            database_link: database_link.clone(),
            collection: collection.clone(),
            options: options.clone(),
        });
        match &self.collection_error {
            Some(e) => Err(e.clone().into()),
            None => Ok(self.outcome()),
        }
    }

    fn endpoint(&self) -> &str {
        "https://recording.documents.azure.com:443/"
    }
}

fn database() -> DatabaseName {
    DatabaseName::new("ItemDb").unwrap()
}

fn collection() -> CollectionName {
    CollectionName::new("ItemCollection").unwrap()
}

fn collection_call(calls: &[Call]) -> (&ResourceLink, &DocumentCollection, &RequestOptions) {
    match calls.get(1) {
        Some(Call::CreateCollection {
            database_link,
            collection,
            options,
        }) => (database_link, collection, options),
        other => panic!("expected collection creation as second call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_database_created_before_collection() {
    let service = RecordingService::default();

    create_database_and_collection_if_not_exist(&service, &database(), &collection(), None, 0)
        .await
        .unwrap();

    let calls = service.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        Call::CreateDatabase(DatabaseDefinition::new(database()))
    );
    let (database_link, created, _) = collection_call(&calls);
    assert_eq!(database_link.as_str(), "dbs/ItemDb");
    assert_eq!(created.id, collection());
}

#[tokio::test]
async fn test_zero_throughput_requests_minimum() {
    let service = RecordingService::default();

    let report =
        create_database_and_collection_if_not_exist(&service, &database(), &collection(), None, 0)
            .await
            .unwrap();

    let calls = service.calls();
    let (_, _, options) = collection_call(&calls);
    assert_eq!(options.offer_throughput, Some(400));
    assert_eq!(report.throughput, MINIMUM_COLLECTION_THROUGHPUT);
}

#[tokio::test]
async fn test_explicit_throughput_forwarded_unchanged() {
    for throughput in [100, 400, 2500] {
        let service = RecordingService::default();

        create_database_and_collection_if_not_exist(
            &service,
            &database(),
            &collection(),
            None,
            throughput,
        )
        .await
        .unwrap();

        let calls = service.calls();
        let (_, _, options) = collection_call(&calls);
        assert_eq!(options.offer_throughput, Some(throughput));
    }
}

#[tokio::test]
async fn test_partition_key_attached() {
    let service = RecordingService::default();

    let report = create_database_and_collection_if_not_exist(
        &service,
        &database(),
        &collection(),
        Some("/category"),
        0,
    )
    .await
    .unwrap();

    let calls = service.calls();
    let (_, created, _) = collection_call(&calls);
    assert_eq!(created.partition_key.paths, vec!["/category".to_string()]);
    assert_eq!(report.partition_key.as_deref(), Some("/category"));
}

#[tokio::test]
async fn test_empty_partition_key_not_attached() {
    for partition_key in [None, Some("")] {
        let service = RecordingService::default();

        let report = create_database_and_collection_if_not_exist(
            &service,
            &database(),
            &collection(),
            partition_key,
            0,
        )
        .await
        .unwrap();

        let calls = service.calls();
        let (_, created, _) = collection_call(&calls);
        assert!(created.partition_key.paths.is_empty());
        assert!(report.partition_key.is_none());
    }
}

#[tokio::test]
async fn test_existing_resources_reported() {
    let service = RecordingService {
        existing: true,
        ..Default::default()
    };

    let report =
        create_database_and_collection_if_not_exist(&service, &database(), &collection(), None, 0)
            .await
            .unwrap();

    assert_eq!(report.database_outcome, ProvisionOutcome::AlreadyExists);
    assert_eq!(report.collection_outcome, ProvisionOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_database_failure_stops_before_collection() {
    let rejection = DocumentClientError::with_status(401, "Unauthorized");
    let service = RecordingService {
        database_error: Some(rejection.clone()),
        ..Default::default()
    };

    let err =
        create_database_and_collection_if_not_exist(&service, &database(), &collection(), None, 0)
            .await
            .unwrap_err();

    assert_eq!(service.calls().len(), 1);
    assert_eq!(try_get_document_client_error(&err), Some(&rejection));
}

#[tokio::test]
async fn test_collection_rejection_propagates_unchanged() {
    let rejection = DocumentClientError::with_status(
        400,
        "The offer throughput provided is below the minimum allowed",
    );
    let service = RecordingService {
        collection_error: Some(rejection.clone()),
        ..Default::default()
    };

    let err = create_database_and_collection_if_not_exist(
        &service,
        &database(),
        &collection(),
        Some("/id"),
        100,
    )
    .await
    .unwrap_err();

    assert!(matches!(&err, BindingError::DocumentClient(e) if *e == rejection));
    assert_eq!(service.calls().len(), 2);
}

#[tokio::test]
async fn test_context_forwards_resolved_attribute() {
    let service = Arc::new(RecordingService::default());
    let attribute = BindingAttribute::builder()
        .database_name("OrdersDb")
        .unwrap()
        .collection_name("Orders")
        .unwrap()
        .partition_key("/customerId")
        .collection_throughput(1000)
        .build()
        .unwrap();
    let context = BindingContext::new(service.clone(), attribute);

    let report = create_database_and_collection_if_not_exist_for(&context)
        .await
        .unwrap();

    assert_eq!(report.database.as_str(), "OrdersDb");
    let calls = service.calls();
    let (database_link, created, options) = collection_call(&calls);
    assert_eq!(database_link.as_str(), "dbs/OrdersDb");
    assert_eq!(created.id.as_str(), "Orders");
    assert_eq!(created.partition_key.paths, vec!["/customerId".to_string()]);
    assert_eq!(options.offer_throughput, Some(1000));
}

#[tokio::test]
async fn test_initialize_binding_skips_when_disabled() {
    let service = Arc::new(RecordingService::default());
    let mut attribute = BindingAttribute::new(database(), collection());
    attribute.create_if_not_exists = false;
    let context = BindingContext::new(service.clone(), attribute);

    let report = initialize_binding(&context).await.unwrap();

    assert!(report.is_none());
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_initialize_binding_provisions_when_enabled() {
    let service = Arc::new(RecordingService::default());
    let context = BindingContext::new(
        service.clone(),
        BindingAttribute::new(database(), collection()),
    );

    let report = initialize_binding(&context).await.unwrap().unwrap();

    assert_eq!(report.collection_outcome, ProvisionOutcome::Created);
    assert_eq!(service.calls().len(), 2);
}
