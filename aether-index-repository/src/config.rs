//! Connection configuration for the OpenSearch client.

use url::Url;

/// Connection parameters for `OpenSearchClient`.
///
/// This is already validated input. Guard clauses such as "https requires a
/// credential" are enforced by the caller that builds it.
#[derive(Clone)]
pub struct ClientConfig {
    /// Engine endpoint.
    pub url: Url,
    /// Encoded API key sent as `Authorization: ApiKey <key>`.
    pub api_key: Option<String>,
    /// PEM-encoded trust root for TLS connections.
    pub ca_certificate: Option<Vec<u8>>,
}

impl ClientConfig {
    /// Create an unauthenticated config for the given endpoint.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            api_key: None,
            ca_certificate: None,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the PEM trust root.
    pub fn with_ca_certificate(mut self, pem: Vec<u8>) -> Self {
        self.ca_certificate = Some(pem);
        self
    }

    /// Whether requests will carry a credential.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("ca_certificate", &self.ca_certificate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new(Url::parse("https://example.es.io:443").unwrap())
            .with_api_key("c2VjcmV0");

        assert!(config.is_authenticated());
        assert!(config.ca_certificate.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new(Url::parse("http://localhost:9200").unwrap())
            .with_api_key("c2VjcmV0");

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("<redacted>"));
    }
}
