//! Storefront configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Storefront the customer returns to from the payment page
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Public base URL of the store
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// ISO code of the primary store currency
    #[serde(default = "default_currency_code")]
    pub primary_currency_code: String,
}

impl StoreConfig {
    pub fn base_url(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidUrl("store.base_url"))
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base_url()?;
        if self.primary_currency_code.trim().is_empty() {
            return Err(ValidationError::MissingRequired("store.primary_currency_code"));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            primary_currency_code: default_currency_code(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_currency_code() -> String {
    "USD".to_string()
}
