//! Seed the evidence index from plain-text files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::document::read_document;
use crate::AdminError;
use aether_index_repository::IndexAdminClient;
use aether_index_shared::EvidenceDocument;

/// Directory holding the bundled example texts.
pub fn example_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("example")
}

/// List every `.txt` file directly under `dir`, sorted by path.
pub fn discover_example_files(dir: &Path) -> Result<Vec<PathBuf>, AdminError> {
    if !dir.is_dir() {
        return Err(AdminError::not_found(format!(
            "Example directory not found: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_text = path.extension().is_some_and(|ext| ext == "txt");
        if is_text && path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(AdminError::not_found(format!(
            "No .txt files found in {}",
            dir.display()
        )));
    }

    files.sort();
    Ok(files)
}

/// Use the explicit file list if one was given, otherwise discover the examples.
pub fn resolve_input_files(
    explicit: &[PathBuf],
    example_dir: &Path,
) -> Result<Vec<PathBuf>, AdminError> {
    if explicit.is_empty() {
        discover_example_files(example_dir)
    } else {
        Ok(explicit.to_vec())
    }
}

/// Derive a document from every file, stopping at the first that fails.
pub fn load_documents(
    paths: &[PathBuf],
    published_at: NaiveDate,
) -> Result<Vec<EvidenceDocument>, AdminError> {
    paths
        .iter()
        .map(|path| read_document(path, published_at))
        .collect()
}

/// Write all documents in one bulk request.
///
/// `connect` is only invoked when there is something to write. Every failed
/// document is reported before `AdminError::BulkFailures` is returned; the
/// documents that succeeded stay written.
///
/// # Returns
///
/// * `Ok(n)` - Number of documents written
pub async fn seed_documents<F>(
    documents: &[EvidenceDocument],
    connect: F,
) -> Result<usize, AdminError>
where
    F: FnOnce() -> Result<IndexAdminClient, AdminError>,
{
    if documents.is_empty() {
        warn!("No documents to seed.");
        return Ok(0);
    }

    let client = connect()?;
    let summary = client.bulk_index(documents).await?;

    if summary.has_failures() {
        for failure in summary.failures() {
            let reason = failure
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(
                document_id = %failure.document_id,
                status = ?failure.status,
                reason = %reason,
                "Failed document"
            );
        }
        return Err(AdminError::BulkFailures {
            failed: summary.failed,
            total: summary.total,
        });
    }

    info!(
        index = %client.index_name(),
        count = summary.succeeded,
        "Seeded {} document(s)",
        summary.succeeded
    );
    Ok(summary.succeeded)
}

/// Resolve input files, derive documents, and write them.
///
/// Input problems surface before `connect` is called, so a missing or empty
/// input never reaches the engine.
pub async fn seed_index<F>(
    explicit: &[PathBuf],
    example_dir: &Path,
    published_at: NaiveDate,
    connect: F,
) -> Result<usize, AdminError>
where
    F: FnOnce() -> Result<IndexAdminClient, AdminError>,
{
    let files = resolve_input_files(explicit, example_dir)?;
    info!(files = files.len(), "Resolved input files");

    let documents = load_documents(&files, published_at)?;
    seed_documents(&documents, connect).await
}
