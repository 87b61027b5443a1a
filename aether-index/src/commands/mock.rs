//! Mock provider shared by the command tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aether_index_repository::{
    BatchOperationResult, BatchOperationSummary, IndexAdminClient, IndexAdminError,
    IndexAdminProvider, IndexDeletion,
};
use aether_index_shared::EvidenceDocument;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Exists(String),
    Create(String),
    Delete(String),
    Bulk { index: String, ids: Vec<String> },
}

/// Records every call and answers from its configuration.
#[derive(Default)]
pub struct MockProvider {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub index_present: AtomicBool,
    pub fail_requests: bool,
    pub rejected_ids: HashSet<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_index(mut self) -> Self {
        self.index_present = AtomicBool::new(true);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_requests = true;
        self
    }

    pub fn rejecting(mut self, id: &str) -> Self {
        self.rejected_ids.insert(id.to_string());
        self
    }

    /// Wrap in a client, keeping a handle on the recorded calls.
    pub fn into_client(self, index: &str) -> (IndexAdminClient, Arc<Mutex<Vec<Call>>>) {
        let calls = self.calls.clone();
        let client = IndexAdminClient::new(Box::new(self), index).unwrap();
        (client, calls)
    }
}

#[async_trait]
impl IndexAdminProvider for MockProvider {
    async fn index_exists(&self, index: &str) -> Result<bool, IndexAdminError> {
        self.calls.lock().await.push(Call::Exists(index.to_string()));
        if self.fail_requests {
            return Err(IndexAdminError::index_check("Mock failure"));
        }
        Ok(self.index_present.load(Ordering::SeqCst))
    }

    async fn create_index(&self, index: &str, _settings: &Value) -> Result<(), IndexAdminError> {
        self.calls.lock().await.push(Call::Create(index.to_string()));
        if self.fail_requests {
            return Err(IndexAdminError::index_creation("Mock failure"));
        }
        self.index_present.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<IndexDeletion, IndexAdminError> {
        self.calls.lock().await.push(Call::Delete(index.to_string()));
        if self.fail_requests {
            return Err(IndexAdminError::index_deletion("Mock failure"));
        }
        if self.index_present.swap(false, Ordering::SeqCst) {
            Ok(IndexDeletion::Deleted)
        } else {
            Ok(IndexDeletion::NotFound)
        }
    }

    async fn bulk_index_documents(
        &self,
        index: &str,
        documents: &[EvidenceDocument],
    ) -> Result<BatchOperationSummary, IndexAdminError> {
        self.calls.lock().await.push(Call::Bulk {
            index: index.to_string(),
            ids: documents.iter().map(|doc| doc.id.clone()).collect(),
        });
        if self.fail_requests {
            return Err(IndexAdminError::bulk_operation("Mock failure"));
        }

        let results = documents
            .iter()
            .map(|doc| {
                let rejected = self.rejected_ids.contains(&doc.id);
                BatchOperationResult {
                    document_id: doc.id.clone(),
                    success: !rejected,
                    status: Some(if rejected { 400 } else { 201 }),
                    error: rejected
                        .then(|| IndexAdminError::bulk_operation("mapper_parsing_exception")),
                }
            })
            .collect();

        Ok(BatchOperationSummary::from_results(results))
    }
}
