//! Export (document template service) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::apitemplate::{ApiTemplateConfig, DEFAULT_BASE_URL};

/// Template service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Endpoint root; `/create` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Template the trip document is rendered into
    #[serde(default)]
    pub template_id: String,

    /// Sent as `X-API-KEY`
    pub api_key: Secret<String>,
}

impl ExportConfig {
    /// Renderer configuration for this section.
    pub fn renderer_config(&self) -> ApiTemplateConfig {
        ApiTemplateConfig::new(self.template_id.clone(), self.api_key.clone())
            .with_base_url(self.base_url.clone())
    }

    /// Validate export configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if self.template_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EXPORT__TEMPLATE_ID"));
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("EXPORT__API_KEY"));
        }
        let is_https = self.base_url.starts_with("https://");
        if !is_https && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidExportUrl);
        }
        if environment == Environment::Production && !is_https {
            return Err(ValidationError::ExportUrlMustBeHttps);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
