//! Azure Cosmos DB integration
//!
//! This module implements the document database service on top of the
//! `azure_data_cosmos` SDK.

pub mod adapter;
pub mod client;

pub use adapter::CosmosDbAdapter;
pub use client::CosmosDbClient;
