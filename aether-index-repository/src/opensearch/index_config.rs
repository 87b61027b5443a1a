//! Index settings and mappings for the evidence index.

use serde_json::{json, Value};

/// Get the create-index body for the evidence index.
///
/// The mapping is strict: documents carrying fields not listed here are
/// rejected by the engine.
///
/// - **Keyword fields**: `id`, `source_url` and `tags`, for exact lookups and filtering
/// - **Text fields**: `title` (with a `raw` keyword subfield for sorting), `summary`, `body`
/// - **Date field**: `published_at`
pub fn index_settings() -> Value {
    json!({
        "mappings": {
            "dynamic": "strict",
            "properties": {
                "id": {
                    "type": "keyword"
                },
                "title": {
                    "type": "text",
                    "fields": {
                        "raw": {
                            "type": "keyword"
                        }
                    }
                },
                "summary": {
                    "type": "text"
                },
                "body": {
                    "type": "text"
                },
                "source_url": {
                    "type": "keyword"
                },
                "published_at": {
                    "type": "date"
                },
                "tags": {
                    "type": "keyword"
                }
            }
        }
    })
}
