//! Index administration client.
//!
//! This module provides the client the admin commands go through. It binds a
//! provider to one index name and validates input before anything is sent.

use crate::errors::IndexAdminError;
use crate::interfaces::IndexAdminProvider;
use crate::opensearch::index_settings;
use crate::types::{BatchOperationSummary, IndexDeletion};
use aether_index_shared::EvidenceDocument;

/// The main client for administering a single index.
pub struct IndexAdminClient {
    provider: Box<dyn IndexAdminProvider>,
    index: String,
}

impl IndexAdminClient {
    /// Create a new client for `index` backed by `provider`.
    pub fn new(
        provider: Box<dyn IndexAdminProvider>,
        index: impl Into<String>,
    ) -> Result<Self, IndexAdminError> {
        let index = index.into();
        if index.trim().is_empty() {
            return Err(IndexAdminError::validation("index name is required"));
        }
        Ok(Self { provider, index })
    }

    /// The index this client operates on.
    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Check whether the index exists.
    pub async fn exists(&self) -> Result<bool, IndexAdminError> {
        self.provider.index_exists(&self.index).await
    }

    /// Create the index with the fixed evidence schema.
    pub async fn create(&self) -> Result<(), IndexAdminError> {
        self.provider
            .create_index(&self.index, &index_settings())
            .await
    }

    /// Delete the index.
    pub async fn delete(&self) -> Result<IndexDeletion, IndexAdminError> {
        self.provider.delete_index(&self.index).await
    }

    /// Write documents to the index in one bulk request.
    /// Input: documents keyed by `id` (re-writing an id overwrites it)
    /// Output: Result<BatchOperationSummary, IndexAdminError>
    ///
    /// An empty slice returns an empty summary without a request.
    pub async fn bulk_index(
        &self,
        documents: &[EvidenceDocument],
    ) -> Result<BatchOperationSummary, IndexAdminError> {
        if documents.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        // Validate all documents
        for document in documents {
            if document.id.is_empty() {
                return Err(IndexAdminError::validation("All documents must have an id"));
            }
        }

        self.provider
            .bulk_index_documents(&self.index, documents)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchOperationResult;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock provider for testing
    #[derive(Default)]
    struct MockProvider {
        created: Arc<Mutex<Vec<(String, Value)>>>,
        bulk_requests: Arc<Mutex<Vec<(String, usize)>>>,
    }

    #[async_trait]
    impl IndexAdminProvider for MockProvider {
        async fn index_exists(&self, _index: &str) -> Result<bool, IndexAdminError> {
            Ok(false)
        }

        async fn create_index(&self, index: &str, settings: &Value) -> Result<(), IndexAdminError> {
            self.created
                .lock()
                .await
                .push((index.to_string(), settings.clone()));
            Ok(())
        }

        async fn delete_index(&self, _index: &str) -> Result<IndexDeletion, IndexAdminError> {
            Ok(IndexDeletion::Deleted)
        }

        async fn bulk_index_documents(
            &self,
            index: &str,
            documents: &[EvidenceDocument],
        ) -> Result<BatchOperationSummary, IndexAdminError> {
            self.bulk_requests
                .lock()
                .await
                .push((index.to_string(), documents.len()));

            let results = documents
                .iter()
                .map(|doc| BatchOperationResult {
                    document_id: doc.id.clone(),
                    success: true,
                    status: Some(201),
                    error: None,
                })
                .collect();
            Ok(BatchOperationSummary::from_results(results))
        }
    }

    fn document(id: &str) -> EvidenceDocument {
        EvidenceDocument {
            id: id.to_string(),
            title: "Title".to_string(),
            summary: "Summary".to_string(),
            body: "Title\n\nSummary".to_string(),
            source_url: String::new(),
            published_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            tags: vec!["example".to_string()],
        }
    }

    #[test]
    fn test_new_rejects_blank_index() {
        let result = IndexAdminClient::new(Box::new(MockProvider::default()), "  ");
        assert!(matches!(result, Err(IndexAdminError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_sends_fixed_schema() {
        let provider = MockProvider::default();
        let created = provider.created.clone();
        let client = IndexAdminClient::new(Box::new(provider), "aether_evidence").unwrap();

        client.create().await.unwrap();

        let created = created.lock().await;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "aether_evidence");
        assert_eq!(created[0].1, index_settings());
    }

    #[tokio::test]
    async fn test_bulk_index_empty_skips_request() {
        let provider = MockProvider::default();
        let bulk_requests = provider.bulk_requests.clone();
        let client = IndexAdminClient::new(Box::new(provider), "aether_evidence").unwrap();

        let summary = client.bulk_index(&[]).await.unwrap();

        assert_eq!(summary.total, 0);
        assert!(bulk_requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_index_rejects_missing_id() {
        let provider = MockProvider::default();
        let bulk_requests = provider.bulk_requests.clone();
        let client = IndexAdminClient::new(Box::new(provider), "aether_evidence").unwrap();

        let result = client.bulk_index(&[document("a"), document("")]).await;

        assert!(matches!(result, Err(IndexAdminError::ValidationError(_))));
        assert!(bulk_requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_index_single_request() {
        let provider = MockProvider::default();
        let bulk_requests = provider.bulk_requests.clone();
        let client = IndexAdminClient::new(Box::new(provider), "evidence_test").unwrap();

        let summary = client
            .bulk_index(&[document("a"), document("b"), document("c")])
            .await
            .unwrap();

        assert_eq!(summary.succeeded, 3);
        let requests = bulk_requests.lock().await;
        assert_eq!(requests.as_slice(), &[("evidence_test".to_string(), 3)]);
    }
}
