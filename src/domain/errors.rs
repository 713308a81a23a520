//! Domain error types
//!
//! This module defines the error hierarchy for docdb-binding.
//! Database-client failures are carried as [`DocumentClientError`] so callers
//! never need to name third-party SDK types.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Main docdb-binding error type
///
/// This is the primary error type used throughout the crate. Failures from
/// several concurrent operations are bundled into [`BindingError::Aggregate`].
#[derive(Debug, Error)]
pub enum BindingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors raised by the document database client
    #[error("Document client error: {0}")]
    DocumentClient(#[from] DocumentClientError),

    /// Failures of concurrent operations bundled into one value
    #[error("{}", aggregate_message(.0))]
    Aggregate(Vec<BindingError>),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl BindingError {
    /// Bundles several failures into an aggregate
    pub fn aggregate(errors: impl IntoIterator<Item = BindingError>) -> Self {
        BindingError::Aggregate(errors.into_iter().collect())
    }

    /// Returns the primary inner error of an aggregate
    ///
    /// This is the first bundled failure, or `None` for any other variant.
    pub fn inner_error(&self) -> Option<&BindingError> {
        match self {
            BindingError::Aggregate(inner) => inner.first(),
            _ => None,
        }
    }
}

fn aggregate_message(inner: &[BindingError]) -> String {
    match inner {
        [] => "One or more errors occurred".to_string(),
        [only] => format!("One or more errors occurred ({only})"),
        [first, rest @ ..] => format!(
            "One or more errors occurred ({first}) and {} more",
            rest.len()
        ),
    }
}

/// Error raised by the document database client
///
/// Carries the service response details a retry policy needs: HTTP status,
/// sub-status, and the server's retry-after hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentClientError {
    /// HTTP status code of the failed request, if a response was received
    pub status_code: Option<u16>,

    /// Service sub-status code
    pub sub_status: Option<u32>,

    /// Delay the service asked the client to wait before retrying
    pub retry_after: Option<Duration>,

    /// Service activity id for correlating with server-side diagnostics
    pub activity_id: Option<String>,

    /// Error message
    pub message: String,
}

impl DocumentClientError {
    /// Creates a new error without a status code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            sub_status: None,
            retry_after: None,
            activity_id: None,
            message: message.into(),
        }
    }

    /// Creates a new error for an HTTP status code
    pub fn with_status(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            ..Self::new(message)
        }
    }

    /// Sets the sub-status code
    pub fn sub_status(mut self, sub_status: u32) -> Self {
        self.sub_status = Some(sub_status);
        self
    }

    /// Sets the retry-after hint
    pub fn retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    /// Sets the activity id
    pub fn activity_id(mut self, activity_id: impl Into<String>) -> Self {
        self.activity_id = Some(activity_id.into());
        self
    }

    /// Resource does not exist (404)
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    /// Resource already exists (409)
    pub fn is_conflict(&self) -> bool {
        self.status_code == Some(409)
    }

    /// Request rate too large (429)
    pub fn is_throttled(&self) -> bool {
        self.status_code == Some(429)
    }
}

impl fmt::Display for DocumentClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "{status} - {}", self.message)?,
            None => write!(f, "{}", self.message)?,
        }
        if let Some(retry_after) = self.retry_after {
            write!(f, " (retry after {}ms)", retry_after.as_millis())?;
        }
        Ok(())
    }
}

impl std::error::Error for DocumentClientError {}

// Conversion from std::io::Error
impl From<std::io::Error> for BindingError {
    fn from(err: std::io::Error) -> Self {
        BindingError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BindingError {
    fn from(err: serde_json::Error) -> Self {
        BindingError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BindingError {
    fn from(err: toml::de::Error) -> Self {
        BindingError::Configuration(format!("TOML parse error: {err}"))
    }
}
