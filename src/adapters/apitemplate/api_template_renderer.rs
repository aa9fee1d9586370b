//! APITemplate renderer - Implementation of TripDocumentRenderer for apitemplate.io.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiTemplateConfig::new(template_id, api_key)
//!     .with_base_url("https://api.apitemplate.io/v1");
//!
//! let renderer = ApiTemplateRenderer::new(config);
//! ```
//!
//! One call issues one `POST {base_url}/create?template_id=...` carrying the
//! payload as JSON and the key in `X-API-KEY`. There is no retry.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

use crate::domain::export::{ExportedDocument, TripTemplatePayload};
use crate::ports::{TemplateError, TripDocumentRenderer};

/// Default endpoint root of the template service.
pub const DEFAULT_BASE_URL: &str = "https://api.apitemplate.io/v1";

/// Configuration for the APITemplate renderer.
#[derive(Debug, Clone)]
pub struct ApiTemplateConfig {
    /// Template to render trips into.
    pub template_id: String,
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.apitemplate.io/v1).
    pub base_url: String,
}

impl ApiTemplateConfig {
    /// Creates a new configuration for the given template and API key.
    pub fn new(template_id: impl Into<String>, api_key: Secret<String>) -> Self {
        Self {
            template_id: template_id.into(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// apitemplate.io document renderer.
pub struct ApiTemplateRenderer {
    config: ApiTemplateConfig,
    client: Client,
}

impl ApiTemplateRenderer {
    /// Creates a renderer with a default HTTP client.
    pub fn new(config: ApiTemplateConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a renderer sharing an existing HTTP client.
    pub fn with_client(config: ApiTemplateConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Document creation endpoint. The template id travels as a query pair.
    fn create_url(&self) -> String {
        format!("{}/create", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TripDocumentRenderer for ApiTemplateRenderer {
    async fn render(
        &self,
        payload: &TripTemplatePayload,
    ) -> Result<ExportedDocument, TemplateError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| TemplateError::Serialization(e.to_string()))?;

        tracing::debug!(
            template_id = %self.config.template_id,
            bytes = body.len(),
            "Sending trip to template service"
        );

        let response = self
            .client
            .post(self.create_url())
            .query(&[("template_id", self.config.template_id.as_str())])
            .header("X-API-KEY", self.config.api_key())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TemplateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Template service rejected request");
            return Err(TemplateError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TemplateError::Decode(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| TemplateError::Decode(e.to_string()))?;

        Ok(ExportedDocument::from_response(value))
    }
}
