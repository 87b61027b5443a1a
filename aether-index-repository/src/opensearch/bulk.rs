//! Bulk request bodies and response parsing.

use opensearch::http::request::JsonBody;
use serde_json::{json, Value};

use crate::errors::IndexAdminError;
use crate::types::{BatchOperationResult, BatchOperationSummary};
use aether_index_shared::EvidenceDocument;

/// Build the NDJSON body for a bulk write: one `index` action line followed by
/// the document source, per document.
pub(crate) fn build_bulk_body(
    index: &str,
    documents: &[EvidenceDocument],
) -> Result<Vec<JsonBody<Value>>, IndexAdminError> {
    let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);

    for doc in documents {
        let source = serde_json::to_value(doc).map_err(|e| {
            IndexAdminError::serialization(format!("document '{}': {}", doc.id, e))
        })?;
        body.push(json!({"index": {"_index": index, "_id": doc.document_id()}}).into());
        body.push(source.into());
    }

    Ok(body)
}

/// Turn a bulk response into a per-document summary.
///
/// Each entry in `items` is keyed by its action name (`index` here). An item
/// carrying an `error` object is a failure regardless of the top-level
/// `errors` flag.
pub(crate) fn summarize_bulk_response(
    response: &Value,
) -> Result<BatchOperationSummary, IndexAdminError> {
    let items = response
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| IndexAdminError::parse("bulk response has no items array"))?;

    let results = items
        .iter()
        .map(|item| {
            let outcome = item
                .as_object()
                .and_then(|actions| actions.values().next())
                .unwrap_or(&Value::Null);

            let document_id = outcome
                .get("_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let status = outcome
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|s| u16::try_from(s).ok());

            match outcome.get("error") {
                Some(error) => BatchOperationResult {
                    document_id,
                    success: false,
                    status,
                    error: Some(IndexAdminError::bulk_operation(describe_item_error(error))),
                },
                None => BatchOperationResult {
                    document_id,
                    success: true,
                    status,
                    error: None,
                },
            }
        })
        .collect();

    Ok(BatchOperationSummary::from_results(results))
}

fn describe_item_error(error: &Value) -> String {
    let kind = error.get("type").and_then(Value::as_str);
    let reason = error.get("reason").and_then(Value::as_str);

    match (kind, reason) {
        (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => error.to_string(),
    }
}
