//! Binding attribute domain model
//!
//! A [`BindingAttribute`] is the resolved description of one document
//! database binding: where its documents live and how the collection should
//! be created when it is missing.

use super::ids::{CollectionName, DatabaseName};
use serde::{Deserialize, Serialize};

/// Resolved binding attribute
///
/// # Examples
///
/// ```
/// use docdb_binding::domain::BindingAttribute;
///
/// let attribute = BindingAttribute::builder()
///     .database_name("ItemDb").unwrap()
///     .collection_name("ItemCollection").unwrap()
///     .partition_key("/category")
///     .collection_throughput(1000)
///     .build()
///     .unwrap();
///
/// assert_eq!(attribute.partition_key_path(), Some("/category"));
/// assert!(attribute.create_if_not_exists);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingAttribute {
    /// Database holding the collection
    pub database_name: DatabaseName,

    /// Collection holding the documents
    pub collection_name: CollectionName,

    /// Partition key path for a newly created collection (e.g. `/category`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,

    /// Throughput for a newly created collection; 0 selects the service minimum
    #[serde(default)]
    pub collection_throughput: u32,

    /// Create the database and collection when they do not exist
    #[serde(default = "default_create_if_not_exists")]
    pub create_if_not_exists: bool,

    /// Name of the setting holding the account connection string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string_setting: Option<String>,
}

fn default_create_if_not_exists() -> bool {
    true
}

impl BindingAttribute {
    /// Creates an attribute for a database and collection with default settings
    pub fn new(database_name: DatabaseName, collection_name: CollectionName) -> Self {
        Self {
            database_name,
            collection_name,
            partition_key: None,
            collection_throughput: 0,
            create_if_not_exists: default_create_if_not_exists(),
            connection_string_setting: None,
        }
    }

    /// Returns a builder for constructing a BindingAttribute
    pub fn builder() -> BindingAttributeBuilder {
        BindingAttributeBuilder::default()
    }

    /// Returns the partition key path, treating an empty path as unset
    pub fn partition_key_path(&self) -> Option<&str> {
        self.partition_key.as_deref().filter(|path| !path.is_empty())
    }

    /// Validates settings the resource id types cannot check on their own
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = self.partition_key_path() {
            if !path.starts_with('/') {
                return Err(format!(
                    "partition_key '{path}' for collection '{}' must start with '/'",
                    self.collection_name
                ));
            }
        }
        Ok(())
    }
}

/// Builder for constructing BindingAttribute instances
#[derive(Debug, Default)]
pub struct BindingAttributeBuilder {
    database_name: Option<DatabaseName>,
    collection_name: Option<CollectionName>,
    partition_key: Option<String>,
    collection_throughput: u32,
    create_if_not_exists: Option<bool>,
    connection_string_setting: Option<String>,
}

impl BindingAttributeBuilder {
    /// Creates a new BindingAttributeBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the database name
    pub fn database_name(mut self, name: impl Into<String>) -> Result<Self, String> {
        self.database_name = Some(DatabaseName::new(name)?);
        Ok(self)
    }

    /// Sets the collection name
    pub fn collection_name(mut self, name: impl Into<String>) -> Result<Self, String> {
        self.collection_name = Some(CollectionName::new(name)?);
        Ok(self)
    }

    /// Sets the partition key path
    pub fn partition_key(mut self, path: impl Into<String>) -> Self {
        self.partition_key = Some(path.into());
        self
    }

    /// Sets the collection throughput
    pub fn collection_throughput(mut self, throughput: u32) -> Self {
        self.collection_throughput = throughput;
        self
    }

    /// Sets whether missing resources are created
    pub fn create_if_not_exists(mut self, create: bool) -> Self {
        self.create_if_not_exists = Some(create);
        self
    }

    /// Sets the connection string setting name
    pub fn connection_string_setting(mut self, setting: impl Into<String>) -> Self {
        self.connection_string_setting = Some(setting.into());
        self
    }

    /// Builds the BindingAttribute
    ///
    /// # Errors
    ///
    /// Returns an error if the database or collection name was not set
    pub fn build(self) -> Result<BindingAttribute, String> {
        let database_name = self
            .database_name
            .ok_or_else(|| "database_name is required".to_string())?;
        let collection_name = self
            .collection_name
            .ok_or_else(|| "collection_name is required".to_string())?;

        Ok(BindingAttribute {
            database_name,
            collection_name,
            partition_key: self.partition_key,
            collection_throughput: self.collection_throughput,
            create_if_not_exists: self
                .create_if_not_exists
                .unwrap_or_else(default_create_if_not_exists),
            connection_string_setting: self.connection_string_setting,
        })
    }
}
