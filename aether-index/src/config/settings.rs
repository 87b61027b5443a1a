//! Runtime settings resolved once at process start.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use super::sources::{candidate_env_files, repository_root, ConfigSources};
use crate::AdminError;

/// Default index name.
pub const DEFAULT_INDEX: &str = "aether_evidence";

/// Connection and index settings for the admin binaries.
///
/// Built once from the layered sources and passed by reference afterwards;
/// later changes to the environment have no effect on it.
#[derive(Clone, Default)]
pub struct Settings {
    /// `ELASTIC_URL`, if configured.
    pub url: Option<String>,
    /// `ELASTIC_API_KEY`, if configured.
    pub api_key: Option<String>,
    /// `AETHER_ELASTIC_INDEX` or `ELASTIC_INDEX` from the earliest source
    /// holding either, then the default.
    pub index: String,
    /// `ELASTIC_CA_CERT_PATH`, if configured.
    pub ca_cert_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the process environment and the candidate `.env` files.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_URL`: engine endpoint (default applied by the client builder)
    /// - `ELASTIC_API_KEY`: encoded API key
    /// - `AETHER_ELASTIC_INDEX` / `ELASTIC_INDEX`: index name (default: aether_evidence)
    /// - `ELASTIC_CA_CERT_PATH`: PEM trust root for TLS
    pub fn load() -> Result<Self, AdminError> {
        let cwd = env::current_dir()?;
        let mut sources = ConfigSources::from_process_env();

        for path in candidate_env_files(&cwd, &repository_root()) {
            sources.merge_env_file(&path)?;
        }

        let settings = Self::from_sources(&sources);
        debug!(
            index = %settings.index,
            url_configured = settings.url.is_some(),
            api_key_configured = settings.api_key.is_some(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Resolve settings from already-merged sources.
    pub fn from_sources(sources: &ConfigSources) -> Self {
        let index = sources
            .get_first_of(&["AETHER_ELASTIC_INDEX", "ELASTIC_INDEX"])
            .unwrap_or(DEFAULT_INDEX)
            .to_string();

        Self {
            url: sources.get("ELASTIC_URL").map(str::to_string),
            api_key: sources.get("ELASTIC_API_KEY").map(str::to_string),
            index,
            ca_cert_path: sources.get("ELASTIC_CA_CERT_PATH").map(PathBuf::from),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("index", &self.index)
            .field("ca_cert_path", &self.ca_cert_path)
            .finish()
    }
}
