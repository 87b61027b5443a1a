//! # Aether Index Repository
//!
//! This crate provides the provider trait for index administration, the
//! types its operations return, and a concrete implementation speaking the
//! OpenSearch/Elasticsearch REST protocol.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::IndexAdminClient;
pub use config::ClientConfig;
pub use errors::IndexAdminError;
pub use interfaces::IndexAdminProvider;
pub use opensearch::{index_settings, OpenSearchClient};
pub use types::{BatchOperationResult, BatchOperationSummary, IndexDeletion};
