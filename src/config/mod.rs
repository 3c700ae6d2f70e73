//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `COUNTRYCLUB` prefix and nested values
//! are separated by double underscores. The conventional bare `DATABASE_URL`
//! and `PORT` variables are honored too and take precedence.
//!
//! # Example
//!
//! ```no_run
//! use countryclub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present
    /// 2. Reads variables with the `COUNTRYCLUB` prefix
    /// 3. Applies bare `DATABASE_URL` and `PORT` on top
    ///
    /// # Environment Variable Format
    ///
    /// - `COUNTRYCLUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COUNTRYCLUB__DATABASE__URL=...` -> `database.url = ...`
    /// - `DATABASE_URL=...` -> `database.url = ...`
    /// - `PORT=8080` -> `server.port = 8080`
    ///
    /// Every value has a default, so an empty environment still loads.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COUNTRYCLUB")
                    .separator("__"),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
