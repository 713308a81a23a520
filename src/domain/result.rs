//! Result type alias for docdb-binding

use super::errors::BindingError;

/// Result type alias for docdb-binding operations
///
/// # Examples
///
/// ```
/// use docdb_binding::domain::result::Result;
/// use docdb_binding::domain::errors::BindingError;
///
/// fn failing_function() -> Result<()> {
///     Err(BindingError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BindingError>;
