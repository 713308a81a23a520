//! Document client error classification
//!
//! Retry and error-handling code uses these functions to tell a failure that
//! came from the document database client apart from an application error.
//! Only one level of aggregation is unwrapped: an aggregate whose primary
//! inner error is itself an aggregate is not recognized.

use crate::domain::{BindingError, DocumentClientError};
use std::error::Error as StdError;

/// Returns the document client error carried by `error`, if any
///
/// Recognizes a direct [`BindingError::DocumentClient`] and an
/// [`BindingError::Aggregate`] whose primary inner error is one.
///
/// # Examples
///
/// ```
/// use docdb_binding::core::classify::try_get_document_client_error;
/// use docdb_binding::domain::{BindingError, DocumentClientError};
///
/// let err = BindingError::aggregate([BindingError::from(
///     DocumentClientError::with_status(429, "Request rate is large"),
/// )]);
///
/// let client_err = try_get_document_client_error(&err).unwrap();
/// assert_eq!(client_err.status_code, Some(429));
///
/// let other = BindingError::Validation("bad input".to_string());
/// assert!(try_get_document_client_error(&other).is_none());
/// ```
pub fn try_get_document_client_error(error: &BindingError) -> Option<&DocumentClientError> {
    match error {
        BindingError::DocumentClient(client_error) => Some(client_error),
        BindingError::Aggregate(_) => match error.inner_error() {
            Some(BindingError::DocumentClient(client_error)) => Some(client_error),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `error` originated from the document database client
pub fn is_document_client_error(error: &BindingError) -> bool {
    try_get_document_client_error(error).is_some()
}

/// Classify an arbitrary error value
///
/// Accepts a bare [`DocumentClientError`] or a [`BindingError`] (classified
/// with [`try_get_document_client_error`]). Any other error type yields `None`.
pub fn find_document_client_error<'a>(
    error: &'a (dyn StdError + 'static),
) -> Option<&'a DocumentClientError> {
    if let Some(client_error) = error.downcast_ref::<DocumentClientError>() {
        return Some(client_error);
    }

    error
        .downcast_ref::<BindingError>()
        .and_then(try_get_document_client_error)
}
