//! RefundOrderHandler - Asks the gateway to refund a captured order.
//!
//! A successful call only means the gateway accepted the request. The
//! refund itself is confirmed later by a callback.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::foundation::{to_minor_units, DomainError};
use crate::domain::refund::CreateRefundRequest;
use crate::domain::store::Order;
use crate::ports::{GatewayError, PaymentGateway, SettingsProvider, StoreDirectory};

/// Shown to the merchant after the gateway accepts a refund.
pub const REFUND_SENT_MESSAGE: &str = "Refund request is sent. The refund performing period depends on the issuing bank and may take a long time. The request result will be displayed in the order notes.";

/// Refund `order`, fully or by `amount_to_refund`.
#[derive(Debug, Clone)]
pub struct RefundOrderCommand {
    pub order: Order,
    pub amount_to_refund: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundOrderResult {
    pub partial: bool,
    pub message: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefundError {
    /// Invalid settings or missing currency; nothing was sent.
    #[error("Refund preconditions failed: {}", .0.join(" "))]
    Precondition(Vec<String>),

    #[error("Error when generating the signature. Check that the secret key in the plugin settings is valid.")]
    Signing,

    #[error("Cannot create the refund for the order '{0}'. The ECommpay endpoint isn't responding.")]
    NoResponse(String),

    #[error("{0}")]
    Gateway(GatewayError),

    #[error("Store lookup failed: {0}")]
    Infrastructure(String),
}

impl RefundError {
    pub fn messages(&self) -> Vec<String> {
        match self {
            RefundError::Precondition(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<DomainError> for RefundError {
    fn from(err: DomainError) -> Self {
        RefundError::Infrastructure(err.to_string())
    }
}

pub struct RefundOrderHandler {
    settings: Arc<dyn SettingsProvider>,
    directory: Arc<dyn StoreDirectory>,
    gateway: Arc<dyn PaymentGateway>,
}

impl RefundOrderHandler {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        directory: Arc<dyn StoreDirectory>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            settings,
            directory,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: RefundOrderCommand) -> Result<RefundOrderResult, RefundError> {
        let order = cmd.order;
        let settings = self.settings.payment_settings().await?;
        let mut errors = Vec::new();

        let credential = match settings.validate() {
            Ok(credential) => Some(credential),
            Err(e) => {
                errors.extend(e.messages());
                None
            }
        };

        let currency_id = self.directory.primary_currency_id();
        let currency = self.directory.currency_by_id(&currency_id).await?;
        if currency.is_none() {
            errors.push(format!(
                "The primary store currency with ID: '{}' not found.",
                currency_id
            ));
        }

        let (Some(credential), Some(currency)) = (credential, currency) else {
            return Err(RefundError::Precondition(errors));
        };

        let mut request = CreateRefundRequest::full(
            credential.project_id,
            order.capture_transaction_id.clone(),
            &order.custom_order_number,
        );
        if let Some(amount) = cmd.amount_to_refund {
            let minor = to_minor_units(amount)
                .map_err(|e| RefundError::Precondition(vec![e.to_string()]))?;
            request = request.with_partial_amount(minor, currency.currency_code);
        }
        let partial = request.is_partial();

        let request = request.signed(&credential.signer()).map_err(|e| {
            tracing::error!(order_id = %order.id, error = %e, "Failed to sign refund request");
            RefundError::Signing
        })?;

        match self.gateway.create_refund(&request).await {
            Ok(Some(_)) => {
                tracing::info!(
                    order_id = %order.id,
                    partial,
                    "Refund request accepted by gateway"
                );
                Ok(RefundOrderResult {
                    partial,
                    message: REFUND_SENT_MESSAGE.to_string(),
                })
            }
            Ok(None) => {
                tracing::warn!(order_id = %order.id, "Gateway returned no refund response");
                Err(RefundError::NoResponse(order.custom_order_number))
            }
            Err(e) => {
                tracing::error!(order_id = %order.id, error = %e, "Refund request failed");
                Err(RefundError::Gateway(e))
            }
        }
    }
}
