//! Binding context
//!
//! Pairs a document database service with the resolved attribute of one
//! binding. This is what the framework hands to provisioning during binding
//! setup.

use crate::adapters::database::traits::DocumentDbService;
use crate::domain::BindingAttribute;
use std::fmt;
use std::sync::Arc;

/// Service handle plus resolved binding attribute
#[derive(Clone)]
pub struct BindingContext {
    /// Service the binding talks to
    pub service: Arc<dyn DocumentDbService>,

    /// Resolved attribute of the binding
    pub resolved_attribute: BindingAttribute,
}

impl BindingContext {
    /// Create a new binding context
    pub fn new(service: Arc<dyn DocumentDbService>, resolved_attribute: BindingAttribute) -> Self {
        Self {
            service,
            resolved_attribute,
        }
    }
}

impl fmt::Debug for BindingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingContext")
            .field("endpoint", &self.service.endpoint())
            .field("resolved_attribute", &self.resolved_attribute)
            .finish()
    }
}
