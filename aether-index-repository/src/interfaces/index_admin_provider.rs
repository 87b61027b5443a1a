//! Index administration provider trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::IndexAdminError;
use crate::types::{BatchOperationSummary, IndexDeletion};
use aether_index_shared::EvidenceDocument;

/// Abstracts the search engine behind the index administration operations.
///
/// Implementations are injected into `IndexAdminClient`, which lets the admin
/// commands be exercised against a mock provider in tests.
///
/// Each method maps to exactly one request against the engine.
#[async_trait]
pub trait IndexAdminProvider: Send + Sync {
    /// Check whether `index` exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` / `Ok(false)` - The index is present / absent
    /// * `Err(IndexAdminError)` - If the check itself fails
    async fn index_exists(&self, index: &str) -> Result<bool, IndexAdminError>;

    /// Create `index` with the given settings and mappings body.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index to create
    /// * `settings` - Full create-index body (`{"mappings": ...}`)
    async fn create_index(&self, index: &str, settings: &Value) -> Result<(), IndexAdminError>;

    /// Delete `index`.
    ///
    /// A missing index is reported as `IndexDeletion::NotFound` rather than as
    /// an error.
    async fn delete_index(&self, index: &str) -> Result<IndexDeletion, IndexAdminError>;

    /// Write all documents to `index` in a single bulk request, keyed by
    /// document id.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-document outcomes, including failures
    /// * `Err(IndexAdminError)` - If the bulk request is rejected as a whole
    async fn bulk_index_documents(
        &self,
        index: &str,
        documents: &[EvidenceDocument],
    ) -> Result<BatchOperationSummary, IndexAdminError>;
}
