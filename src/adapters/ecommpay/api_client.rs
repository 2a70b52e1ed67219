//! ECOMMPAY gateway API client.
//!
//! Implements the `PaymentGateway` port over the gateway's JSON API.
//! Requests are signed by the caller; this client only transports them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::refund::{CreateRefundRequest, CreateRefundResponse};
use crate::ports::{ApiError, GatewayError, PaymentGateway};

const REFUND_PATH: &str = "/v2/payment/card/refund";

/// Gateway API connection settings.
#[derive(Debug, Clone)]
pub struct EcommpayApiConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

/// HTTP client for the gateway API.
pub struct EcommpayApiClient {
    config: EcommpayApiConfig,
    http_client: reqwest::Client,
}

impl EcommpayApiClient {
    pub fn new(config: EcommpayApiConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| GatewayError::transport("endpoint", e))
    }

    async fn post<B, R>(&self, operation: &str, path: &str, body: &B) -> Result<Option<R>, GatewayError>
    where
        B: serde::Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(operation, error = %e, "Gateway request failed");
                GatewayError::transport(operation, e)
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(operation, e))?;

        if status >= 400 {
            let api_error = parse_api_error(&text);
            let err = GatewayError::api(operation, status, api_error);
            tracing::error!(operation, status, error = %err, "Gateway rejected request");
            return Err(err);
        }

        parse_body(&text).map_err(|e| {
            tracing::error!(operation, error = %e, "Failed to parse gateway response");
            GatewayError::api(operation, status, None)
        })
    }
}

/// Decodes a success body; an empty or `null` body means no response.
fn parse_body<R: DeserializeOwned>(text: &str) -> Result<Option<R>, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<R>>(text)
}

fn parse_api_error(text: &str) -> Option<ApiError> {
    serde_json::from_str::<Option<ApiError>>(text).ok().flatten()
}

#[async_trait]
impl PaymentGateway for EcommpayApiClient {
    async fn create_refund(
        &self,
        request: &CreateRefundRequest,
    ) -> Result<Option<CreateRefundResponse>, GatewayError> {
        self.post("create_refund", REFUND_PATH, request).await
    }
}
