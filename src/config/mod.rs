//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `TRIP_SPARK` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use trip_spark::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod export;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bind address, environment, logging and HTTP limits
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection pool
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Document template service
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `TRIP_SPARK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `TRIP_SPARK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRIP_SPARK__EXPORT__TEMPLATE_ID=...` -> `export.template_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRIP_SPARK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.export.validate(self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
