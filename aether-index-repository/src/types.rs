//! Result types for index administration operations.

use crate::errors::IndexAdminError;

/// Outcome of an index delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexDeletion {
    /// The index existed and was removed.
    Deleted,
    /// The index did not exist.
    NotFound,
}

/// Result of a batch operation for a single document.
///
/// Indicates whether the write succeeded and, if it failed, the status code
/// and reason reported by the engine.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// The document's id.
    pub document_id: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// HTTP-style status reported for this item, if any.
    pub status: Option<u16>,
    /// Error if the operation failed.
    pub error: Option<IndexAdminError>,
}

/// Summary of a batch operation containing aggregate statistics and individual results.
///
/// Callers use `failures()` to report each failed document individually.
#[derive(Debug, Clone, Default)]
pub struct BatchOperationSummary {
    /// Total number of items in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Individual results for each item.
    pub results: Vec<BatchOperationResult>,
}

impl BatchOperationSummary {
    /// Build a summary from individual results.
    pub fn from_results(results: Vec<BatchOperationResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    /// Iterate over the failed items only.
    pub fn failures(&self) -> impl Iterator<Item = &BatchOperationResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Whether any item failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
