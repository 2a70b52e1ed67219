//! Refund request body sent to the gateway API.

use serde::{Deserialize, Serialize};

use crate::domain::signing::{Signer, SigningError};

/// `POST /v2/payment/card/refund` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRefundRequest {
    pub general: RefundGeneral,
    pub payment: RefundPayment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundGeneral {
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Amount and currency are sent only for partial refunds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub description: String,
}

impl CreateRefundRequest {
    /// Full refund of the payment captured for `custom_order_number`.
    pub fn full(project_id: i64, payment_id: Option<String>, custom_order_number: &str) -> Self {
        Self {
            general: RefundGeneral {
                project_id,
                payment_id,
                signature: None,
            },
            payment: RefundPayment {
                amount: None,
                currency: None,
                description: refund_description(custom_order_number),
            },
        }
    }

    /// Limits the refund to `amount` minor units of `currency`.
    pub fn with_partial_amount(mut self, amount: i64, currency: impl Into<String>) -> Self {
        self.payment.amount = Some(amount);
        self.payment.currency = Some(currency.into());
        self
    }

    pub fn is_partial(&self) -> bool {
        self.payment.amount.is_some()
    }

    /// Signs the body and stores the result at `general.signature`.
    pub fn signed(mut self, signer: &Signer) -> Result<Self, SigningError> {
        let signature = signer.sign_object(&self)?;
        self.general.signature = Some(signature);
        Ok(self)
    }
}

pub fn refund_description(custom_order_number: &str) -> String {
    format!("Refund for the order '{}'.", custom_order_number)
}

/// Acknowledgement returned when a refund is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRefundResponse {
    pub status: Option<String>,
}
