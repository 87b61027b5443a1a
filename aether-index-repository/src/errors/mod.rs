//! Error types for the index administration repository.

mod index_admin_error;

pub use index_admin_error::IndexAdminError;
