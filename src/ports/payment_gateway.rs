//! Payment gateway API port.
//!
//! Abstracts the outbound calls to the gateway so handlers can be tested
//! against a mock and the HTTP client can be swapped.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::refund::{CreateRefundRequest, CreateRefundResponse};

/// HTTP status reported for transport failures.
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Register a refund for a captured payment.
    ///
    /// `Ok(None)` means the gateway answered without a body; the refund
    /// state is then unknown.
    async fn create_refund(
        &self,
        request: &CreateRefundRequest,
    ) -> Result<Option<CreateRefundResponse>, GatewayError>;
}

/// Error body returned by the gateway with status >= 400.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Failure calling the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// HTTP status, or 500 when the request never completed.
    pub status_code: u16,

    /// Human-readable message naming the failed call.
    pub message: String,

    /// Structured error returned by the gateway, if any.
    pub api_error: Option<ApiError>,
}

impl GatewayError {
    /// The request could not be sent or the response could not be read.
    pub fn transport(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            status_code: TRANSPORT_FAILURE_STATUS,
            message: format!(
                "Error when calling '{}'. HTTP status code - {}. {}",
                operation, TRANSPORT_FAILURE_STATUS, cause
            ),
            api_error: None,
        }
    }

    /// The gateway answered with an error status.
    pub fn api(operation: &str, status_code: u16, api_error: Option<ApiError>) -> Self {
        let mut message = format!(
            "Error when calling '{}'. HTTP status code - {}.",
            operation, status_code
        );
        if let Some(err) = &api_error {
            message.push_str(&format!(
                " Status - '{}'. Code - '{}'. Message - '{}'.",
                err.status.as_deref().unwrap_or_default(),
                err.code.as_deref().unwrap_or_default(),
                err.message.as_deref().unwrap_or_default()
            ));
        }
        Self {
            status_code,
            message,
            api_error,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.api_error.is_none() && self.status_code == TRANSPORT_FAILURE_STATUS
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        DomainError::new(ErrorCode::ExternalServiceError, err.message.clone())
            .with_detail("status_code", err.status_code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_reports_500() {
        let err = GatewayError::transport("create_refund", "connection refused");
        assert_eq!(err.status_code, 500);
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "Error when calling 'create_refund'. HTTP status code - 500. connection refused"
        );
    }

    #[test]
    fn api_error_surfaces_gateway_details() {
        let err = GatewayError::api(
            "create_refund",
            400,
            Some(ApiError {
                status: Some("error".into()),
                code: Some("3029".into()),
                message: Some("Payment not found".into()),
            }),
        );

        assert!(!err.is_transport());
        assert!(err.message.contains("HTTP status code - 400."));
        assert!(err.message.contains("Status - 'error'."));
        assert!(err.message.contains("Code - '3029'."));
        assert!(err.message.contains("Message - 'Payment not found'."));
    }

    #[test]
    fn api_error_without_body_keeps_status() {
        let err = GatewayError::api("create_refund", 503, None);
        assert_eq!(
            err.message,
            "Error when calling 'create_refund'. HTTP status code - 503."
        );
    }

    #[test]
    fn converts_to_external_service_domain_error() {
        let err: DomainError = GatewayError::api("create_refund", 502, None).into();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert_eq!(err.details.get("status_code"), Some(&"502".to_string()));
    }
}
