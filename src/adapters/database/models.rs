//! Request models for the document database service
//!
//! These are the payloads handed to [`DocumentDbService`](super::DocumentDbService)
//! implementations. They serialize with the casing of the service's REST API.

use crate::domain::ids::{CollectionName, DatabaseName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative address of a service resource
///
/// # Examples
///
/// ```
/// use docdb_binding::adapters::database::ResourceLink;
/// use docdb_binding::domain::DatabaseName;
///
/// let link = ResourceLink::database(&DatabaseName::new("ItemDb").unwrap());
/// assert_eq!(link.as_str(), "dbs/ItemDb");
/// assert_eq!(link.database_id(), Some("ItemDb"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLink(String);

impl ResourceLink {
    /// Link addressing a database by name: `dbs/{database}`
    pub fn database(database: &DatabaseName) -> Self {
        Self(format!("dbs/{database}"))
    }

    /// Returns the link as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the database id segment of the link
    pub fn database_id(&self) -> Option<&str> {
        self.0
            .strip_prefix("dbs/")
            .and_then(|rest| rest.split('/').next())
            .filter(|id| !id.is_empty())
    }
}

impl fmt::Display for ResourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDefinition {
    /// Database id
    pub id: DatabaseName,
}

impl DatabaseDefinition {
    /// Creates a database definition with the given id
    pub fn new(id: DatabaseName) -> Self {
        Self { id }
    }
}

/// Partition key paths of a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionKeySpec {
    /// Document paths the collection is partitioned by
    pub paths: Vec<String>,
}

/// Collection to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCollection {
    /// Collection id
    pub id: CollectionName,

    /// Partition key definition
    #[serde(default)]
    pub partition_key: PartitionKeySpec,
}

impl DocumentCollection {
    /// Creates an unpartitioned collection definition
    pub fn new(id: CollectionName) -> Self {
        Self {
            id,
            partition_key: PartitionKeySpec::default(),
        }
    }
}

/// Options sent along with a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// Provisioned throughput (request units per second)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_throughput: Option<u32>,
}

/// Result of a create-if-not-exists call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// The resource was created by this call
    Created,
    /// The resource was already present
    AlreadyExists,
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::Created => write!(f, "created"),
            ProvisionOutcome::AlreadyExists => write!(f, "already exists"),
        }
    }
}
