//! Interface definitions for the index administration backend.
//!
//! The `IndexAdminProvider` trait allows the admin operations to run against
//! the real search engine or against a mock in tests.

mod index_admin_provider;

pub use index_admin_provider::IndexAdminProvider;
