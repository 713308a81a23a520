//! Domain models and types for docdb-binding.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated resource ids** ([`DatabaseName`], [`CollectionName`])
//! - **Binding attribute** ([`BindingAttribute`]) describing one binding's target
//! - **Error types** ([`BindingError`], [`DocumentClientError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Failures of the document database client are carried as
//! [`DocumentClientError`]; failures of several concurrent operations are
//! bundled into [`BindingError::Aggregate`]:
//!
//! ```rust
//! use docdb_binding::domain::{BindingError, DocumentClientError};
//!
//! let err = BindingError::aggregate([
//!     BindingError::from(DocumentClientError::with_status(429, "Request rate is large")),
//! ]);
//! assert!(matches!(err.inner_error(), Some(BindingError::DocumentClient(_))));
//! ```

pub mod attribute;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use attribute::{BindingAttribute, BindingAttributeBuilder};
pub use errors::{BindingError, DocumentClientError};
pub use ids::{CollectionName, DatabaseName};
pub use result::Result;
