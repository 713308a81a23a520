//! Resource identifier types with validation
//!
//! Newtype wrappers for Cosmos DB resource ids. Both types enforce the id
//! rules the service applies to databases and collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a resource id
pub const MAX_RESOURCE_ID_LENGTH: usize = 255;

const FORBIDDEN_ID_CHARS: [char; 4] = ['/', '\\', '?', '#'];

fn validate_resource_id(kind: &str, id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err(format!("{kind} cannot be empty"));
    }

    if id.chars().count() > MAX_RESOURCE_ID_LENGTH {
        return Err(format!(
            "{kind} cannot be longer than {MAX_RESOURCE_ID_LENGTH} characters"
        ));
    }

    if let Some(c) = id.chars().find(|c| FORBIDDEN_ID_CHARS.contains(c)) {
        return Err(format!("{kind} '{id}' contains forbidden character '{c}'"));
    }

    if id.ends_with(' ') {
        return Err(format!("{kind} '{id}' cannot end with a space"));
    }

    Ok(())
}

/// Database name newtype wrapper
///
/// # Examples
///
/// ```
/// use docdb_binding::domain::ids::DatabaseName;
/// use std::str::FromStr;
///
/// let name = DatabaseName::from_str("ItemDb").unwrap();
/// assert_eq!(name.as_str(), "ItemDb");
/// assert!(DatabaseName::new("bad/name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseName(String);

impl DatabaseName {
    /// Creates a new DatabaseName from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(DatabaseName)` if the name is a valid resource id, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        validate_resource_id("Database name", &name)?;
        Ok(Self(name))
    }

    /// Returns the database name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatabaseName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatabaseName> for String {
    fn from(name: DatabaseName) -> Self {
        name.0
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Collection name newtype wrapper
///
/// # Examples
///
/// ```
/// use docdb_binding::domain::ids::CollectionName;
///
/// let name = CollectionName::new("ItemCollection").unwrap();
/// assert_eq!(name.to_string(), "ItemCollection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new CollectionName from a string
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        validate_resource_id("Collection name", &name)?;
        Ok(Self(name))
    }

    /// Returns the collection name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
