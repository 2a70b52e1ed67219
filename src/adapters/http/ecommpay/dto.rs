//! HTTP DTOs for the gateway endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Merchant refund request. Omitting `amount` refunds the whole order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefundRequest {
    #[serde(default)]
    pub amount: Option<Decimal>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundResponse {
    pub partial: bool,
    pub message: String,
}

/// Error body listing every human-readable error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            error_code: error_code.into(),
            errors,
        }
    }
}
