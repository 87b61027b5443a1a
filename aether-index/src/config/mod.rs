//! Configuration loading and client wiring for the admin binaries.

mod client_builder;
mod settings;
mod sources;

pub use client_builder::{build_client, resolve_client_config, DEFAULT_ELASTIC_URL};
pub use settings::{Settings, DEFAULT_INDEX};
pub use sources::{candidate_env_files, repository_root, ConfigSources};
