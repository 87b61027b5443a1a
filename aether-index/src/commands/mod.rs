//! The three admin operations: create, delete, and seed.
//!
//! Each operation performs one unit of work against the index and reports
//! what happened through its outcome type.

pub mod create;
pub mod delete;
pub mod seed;

#[cfg(test)]
mod mock;

pub use create::{create_index, CreateOutcome};
pub use delete::{delete_index, DeleteOutcome};
pub use seed::{
    discover_example_files, example_dir, load_documents, resolve_input_files, seed_documents,
    seed_index,
};
