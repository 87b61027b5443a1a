//! # Aether Index
//!
//! Administrative tooling for the Aether evidence index: create it with a
//! fixed schema, delete it behind a confirmation flag, and seed it with
//! example documents derived from plain-text files.
//!
//! Each binary loads configuration once, builds a client, and performs a
//! single unit of work against the search engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;

pub use config::{build_client, Settings};

use aether_index_repository::IndexAdminError;
use thiserror::Error;

/// Errors that can occur while running an admin command.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Missing or misconfigured connection parameters.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A required input (directory, file set) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An input file cannot be turned into a document.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The search engine rejected a request.
    #[error("Request error: {0}")]
    RequestError(#[from] IndexAdminError),

    /// Some documents in a bulk write failed. Each failure has already been reported.
    #[error("{failed} of {total} document(s) failed to index")]
    BulkFailures { failed: usize, total: usize },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdminError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
