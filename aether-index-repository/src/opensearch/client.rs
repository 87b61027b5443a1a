//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `IndexAdminProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cert::{Certificate, CertificateValidation},
    http::{
        headers::{HeaderValue, AUTHORIZATION},
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
    },
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    BulkParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::errors::IndexAdminError;
use crate::interfaces::IndexAdminProvider;
use crate::opensearch::bulk::{build_bulk_body, summarize_bulk_response};
use crate::types::{BatchOperationSummary, IndexDeletion};
use aether_index_shared::EvidenceDocument;

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// use aether_index_repository::{ClientConfig, OpenSearchClient};
/// let config = ClientConfig::new(Url::parse("http://localhost:9200")?);
/// let client = OpenSearchClient::new(config)?;
///
/// if !client.index_exists("aether_evidence").await? {
///     client.create_index("aether_evidence", &index_settings()).await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client from validated connection parameters.
    ///
    /// No request is sent; the connection is only set up.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(IndexAdminError::ConnectionError)` - If the transport cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, IndexAdminError> {
        let conn_pool = SingleNodeConnectionPool::new(config.url.clone());
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let Some(ref api_key) = config.api_key {
            let mut value = HeaderValue::from_str(&format!("ApiKey {}", api_key))
                .map_err(|e| IndexAdminError::connection(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }

        if let Some(ref pem) = config.ca_certificate {
            let certificate = Certificate::from_pem(pem).map_err(|e| {
                IndexAdminError::connection(format!("Invalid CA certificate: {}", e))
            })?;
            builder = builder.cert_validation(CertificateValidation::Full(certificate));
        }

        let transport = builder
            .build()
            .map_err(|e| IndexAdminError::connection(e.to_string()))?;

        info!(
            url = %config.url,
            authenticated = config.is_authenticated(),
            custom_ca = config.ca_certificate.is_some(),
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Read the body of a failed response for error reporting.
    async fn failure_detail(response: Response) -> String {
        let status = response.status_code();
        let body = response.text().await.unwrap_or_default();
        format!("status {}: {}", status, body)
    }
}

#[async_trait]
impl IndexAdminProvider for OpenSearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool, IndexAdminError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| IndexAdminError::index_check(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => {
                let detail = Self::failure_detail(response).await;
                error!(index = %index, detail = %detail, "Index existence check failed");
                Err(IndexAdminError::index_check(detail))
            }
        }
    }

    async fn create_index(&self, index: &str, settings: &Value) -> Result<(), IndexAdminError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(settings.clone())
            .send()
            .await
            .map_err(|e| IndexAdminError::index_creation(e.to_string()))?;

        if !response.status_code().is_success() {
            let detail = Self::failure_detail(response).await;
            error!(index = %index, detail = %detail, "Create index request failed");
            return Err(IndexAdminError::index_creation(detail));
        }

        debug!(index = %index, "Index created");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<IndexDeletion, IndexAdminError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| IndexAdminError::index_deletion(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - the index is already gone
        if status.as_u16() == 404 {
            debug!(index = %index, "Index not found on delete");
            return Ok(IndexDeletion::NotFound);
        }

        if !status.is_success() {
            let detail = Self::failure_detail(response).await;
            error!(index = %index, detail = %detail, "Delete index request failed");
            return Err(IndexAdminError::index_deletion(detail));
        }

        debug!(index = %index, "Index deleted");
        Ok(IndexDeletion::Deleted)
    }

    async fn bulk_index_documents(
        &self,
        index: &str,
        documents: &[EvidenceDocument],
    ) -> Result<BatchOperationSummary, IndexAdminError> {
        let body = build_bulk_body(index, documents)?;

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| IndexAdminError::bulk_operation(e.to_string()))?;

        if !response.status_code().is_success() {
            let detail = Self::failure_detail(response).await;
            error!(index = %index, detail = %detail, "Bulk request failed");
            return Err(IndexAdminError::bulk_operation(detail));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| IndexAdminError::parse(e.to_string()))?;

        let summary = summarize_bulk_response(&response_body)?;

        debug!(
            index = %index,
            total = summary.total,
            failed = summary.failed,
            "Bulk request completed"
        );
        Ok(summary)
    }
}
