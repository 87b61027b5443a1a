//! Client construction from settings.

use std::fs;

use tracing::{info, warn};
use url::Url;

use super::settings::Settings;
use crate::AdminError;
use aether_index_repository::{ClientConfig, IndexAdminClient, OpenSearchClient};

/// Default engine URL.
pub const DEFAULT_ELASTIC_URL: &str = "http://localhost:9200";

/// Validate settings and turn them into connection parameters.
///
/// Falls back to `DEFAULT_ELASTIC_URL` with a warning when no URL is set.
/// An `https` URL without an API key is rejected.
pub fn resolve_client_config(settings: &Settings) -> Result<ClientConfig, AdminError> {
    let url = match settings.url.as_deref() {
        Some(url) => url.to_string(),
        None => {
            warn!(
                url = DEFAULT_ELASTIC_URL,
                "ELASTIC_URL not set, using default"
            );
            DEFAULT_ELASTIC_URL.to_string()
        }
    };

    let parsed = Url::parse(&url)
        .map_err(|e| AdminError::config(format!("Invalid ELASTIC_URL '{}': {}", url, e)))?;

    let mut config = match settings.api_key.as_deref() {
        Some(api_key) => ClientConfig::new(parsed).with_api_key(api_key),
        None if parsed.scheme() == "https" => {
            return Err(AdminError::config(
                "ELASTIC_API_KEY must be set when connecting over HTTPS",
            ));
        }
        None => ClientConfig::new(parsed),
    };

    if let Some(ref path) = settings.ca_cert_path {
        let pem = fs::read(path).map_err(|e| {
            AdminError::config(format!(
                "Failed to read ELASTIC_CA_CERT_PATH {}: {}",
                path.display(),
                e
            ))
        })?;
        config = config.with_ca_certificate(pem);
    }

    Ok(config)
}

/// Build an admin client for `index` from settings.
///
/// No request is sent. Configuration problems surface here, before any
/// command touches the engine.
pub fn build_client(settings: &Settings, index: &str) -> Result<IndexAdminClient, AdminError> {
    let config = resolve_client_config(settings)?;

    let provider = OpenSearchClient::new(config)
        .map_err(|e| AdminError::config(format!("Failed to create search client: {}", e)))?;

    info!(index = %index, "Search client ready");

    Ok(IndexAdminClient::new(Box::new(provider), index)?)
}
