//! # Aether Index Shared
//!
//! Types shared between the repository crate and the admin binaries.

mod document;

pub use document::EvidenceDocument;
