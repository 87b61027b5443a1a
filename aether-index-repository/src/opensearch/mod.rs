//! OpenSearch implementation of the index administration provider.
//!
//! The OpenSearch client speaks the same REST API as Elasticsearch for the
//! index and bulk endpoints used here.

mod bulk;
mod client;
mod index_config;

pub use client::OpenSearchClient;
pub use index_config::index_settings;
