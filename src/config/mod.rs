//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ECOMMPAY_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ecommpay_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {}", config.server.listen_addr);
//! ```

mod error;
mod gateway;
mod server;
mod store;

pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

use crate::domain::settings::PaymentSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listener configuration (address, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gateway hosts and API client settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Initial payment method settings (credentials, flow, fee)
    #[serde(default)]
    pub payment: PaymentSettings,

    /// Storefront settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ECOMMPAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ECOMMPAY__SERVER__LISTEN_ADDR=127.0.0.1:3000` -> `server.listen_addr`
    /// - `ECOMMPAY__PAYMENT__TEST_PROJECT_ID=112` -> `payment.test_project_id = "112"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ECOMMPAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Payment credentials are not checked here. Each operation validates
    /// them itself and reports the problems to its caller.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate(self.is_production())?;
        self.store.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.environment.is_production()
    }
}
