//! Gateway endpoint configuration

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::domain::payment_page::PaymentPageEndpoints;

use super::error::ValidationError;

/// Gateway hosts and HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// JSON API host (refunds)
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Payment page host (embedded widget and redirect page)
    #[serde(default = "default_payment_page_host")]
    pub payment_page_host: String,

    /// User-Agent sent on API calls
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// API call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    pub fn api_base_url(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.api_host).map_err(|_| ValidationError::InvalidUrl("gateway.api_host"))
    }

    pub fn payment_page_endpoints(&self) -> Result<PaymentPageEndpoints, ValidationError> {
        PaymentPageEndpoints::new(&self.payment_page_host)
            .map_err(|_| ValidationError::InvalidUrl("gateway.payment_page_host"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate gateway configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let api = self.api_base_url()?;
        let endpoints = self.payment_page_endpoints()?;
        if production {
            if api.scheme() != "https" {
                return Err(ValidationError::UrlMustBeHttps("gateway.api_host"));
            }
            if endpoints.embedded().scheme() != "https" {
                return Err(ValidationError::UrlMustBeHttps("gateway.payment_page_host"));
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("gateway.user_agent"));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            payment_page_host: default_payment_page_host(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_host() -> String {
    "https://api.ecommpay.com".to_string()
}

fn default_payment_page_host() -> String {
    "https://paymentpage.ecommpay.com".to_string()
}

fn default_user_agent() -> String {
    format!("ecommpay-gateway-{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout() -> u64 {
    20
}
