//! Evidence document stored in the search index.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single evidence document as it is written to the index.
///
/// The serialized form is the `_source` of the document and must match the
/// strict index mapping field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDocument {
    /// Document key, also used as the `_id` on bulk writes.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short summary shown in result lists.
    pub summary: String,
    /// Full document text.
    pub body: String,
    /// Where the evidence came from. Empty for seeded examples.
    pub source_url: String,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub published_at: NaiveDate,
    /// Free-form keyword tags.
    pub tags: Vec<String>,
}

impl EvidenceDocument {
    /// The key used when writing this document.
    pub fn document_id(&self) -> &str {
        &self.id
    }
}
