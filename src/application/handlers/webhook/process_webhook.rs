//! ProcessWebhookHandler - Reconciles gateway callbacks with order payment state.
//!
//! Only configuration, signature, body and order lookup problems fail the
//! callback. Every other outcome is acknowledged so the gateway does not
//! retry deliveries there is nothing to do with.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, OrderGuid, OrderId};
use crate::domain::store::{Order, OrderNote};
use crate::domain::webhook::{CallbackEnvelope, CallbackOperation, OperationType};
use crate::ports::{OrderProcessing, OrderRepository, SettingsProvider};

/// Command to reconcile one callback delivery.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw callback body, read once.
    pub payload: Vec<u8>,
}

/// What the callback changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessWebhookResult {
    OrderMarkedPaid { order_id: OrderId },
    OrderRefunded { order_id: OrderId },
    OrderPartiallyRefunded { order_id: OrderId, amount: Decimal },
    /// Refund callback recorded as a note without a status change.
    RefundNoted { order_id: OrderId },
    /// Acknowledged without effect.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnsupportedOperation(String),
    UnsuccessfulSale,
    NotAnOrderPayment,
    OrderDeleted,
    AlreadyPaid,
    NoRefundAmount,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("The payment method is disabled.")]
    Disabled,

    #[error("Plugin configuration is invalid: {}", .0.join(" "))]
    Configuration(Vec<String>),

    #[error("Invalid signature verification. Make sure that the correct 'Secret key' is specified in the plugin settings.")]
    InvalidSignature,

    #[error("Invalid the deserialization of the callback body: {0}")]
    MalformedPayload(String),

    #[error("The order not found by the specified payment ID '{0}'.")]
    OrderNotFound(OrderGuid),

    #[error("Store operation failed: {0}")]
    Infrastructure(String),
}

impl WebhookError {
    pub fn messages(&self) -> Vec<String> {
        match self {
            WebhookError::Configuration(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Every hard failure answers `400 Bad Request`.
    pub fn status_code(&self) -> u16 {
        400
    }
}

impl From<DomainError> for WebhookError {
    fn from(err: DomainError) -> Self {
        WebhookError::Infrastructure(err.to_string())
    }
}

pub struct ProcessWebhookHandler {
    settings: Arc<dyn SettingsProvider>,
    orders: Arc<dyn OrderRepository>,
    processing: Arc<dyn OrderProcessing>,
}

impl ProcessWebhookHandler {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        orders: Arc<dyn OrderRepository>,
        processing: Arc<dyn OrderProcessing>,
    ) -> Self {
        Self {
            settings,
            orders,
            processing,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<ProcessWebhookResult, WebhookError> {
        // 1. The secret must be usable before anything is trusted
        let settings = self.settings.payment_settings().await?;
        if !settings.enabled {
            return Err(WebhookError::Disabled);
        }
        let credential = settings
            .validate()
            .map_err(|e| WebhookError::Configuration(e.messages()))?;

        // 2. Verify the signature over the raw body
        let raw = String::from_utf8_lossy(&cmd.payload);
        if !credential.signer().verify(&raw) {
            tracing::warn!("Callback signature verification failed");
            return Err(WebhookError::InvalidSignature);
        }

        // 3. Parse the authenticated body
        let envelope = CallbackEnvelope::parse(&raw)
            .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

        // 4. Dispatch on the operation type
        match envelope.operation_type() {
            OperationType::Sale => self.handle_sale(&envelope).await,
            OperationType::Refund => self.handle_refund(&envelope).await,
            OperationType::Unknown(kind) => {
                tracing::debug!(operation = %kind, "Ignoring callback operation");
                Ok(ProcessWebhookResult::Ignored(IgnoreReason::UnsupportedOperation(
                    kind,
                )))
            }
        }
    }

    async fn handle_sale(
        &self,
        envelope: &CallbackEnvelope,
    ) -> Result<ProcessWebhookResult, WebhookError> {
        if !envelope.is_successful_operation() {
            return Ok(ProcessWebhookResult::Ignored(IgnoreReason::UnsuccessfulSale));
        }

        let (guid, mut order) = match self.resolve_order(envelope).await? {
            Ok(found) => found,
            Err(reason) => return Ok(ProcessWebhookResult::Ignored(reason)),
        };

        // Repeated deliveries find the order already paid
        if !self.processing.can_mark_order_as_paid(&order) {
            return Ok(ProcessWebhookResult::Ignored(IgnoreReason::AlreadyPaid));
        }

        order.capture_transaction_id = Some(guid.to_string());
        match self.processing.mark_order_as_paid(&mut order).await {
            Ok(()) => {}
            Err(e) if already_applied(&e) => {
                return Ok(ProcessWebhookResult::Ignored(IgnoreReason::AlreadyPaid));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(order_id = %order.id, payment_id = %guid, "Order marked as paid");
        Ok(ProcessWebhookResult::OrderMarkedPaid { order_id: order.id })
    }

    async fn handle_refund(
        &self,
        envelope: &CallbackEnvelope,
    ) -> Result<ProcessWebhookResult, WebhookError> {
        let (_, mut order) = match self.resolve_order(envelope).await? {
            Ok(found) => found,
            Err(reason) => return Ok(ProcessWebhookResult::Ignored(reason)),
        };

        let Some(operation) = envelope.operation.as_ref() else {
            return Ok(ProcessWebhookResult::Ignored(IgnoreReason::NoRefundAmount));
        };
        let Some((sum, amount)) = operation
            .sum_initial
            .as_ref()
            .and_then(|sum| sum.major_amount().map(|amount| (sum, amount)))
        else {
            return Ok(ProcessWebhookResult::Ignored(IgnoreReason::NoRefundAmount));
        };

        self.record_refund_note(&order, operation, amount, sum.currency.as_deref())
            .await?;

        if !envelope.is_successful_operation() {
            return Ok(ProcessWebhookResult::RefundNoted { order_id: order.id });
        }

        // Exact equality picks the full refund path
        if order.order_total == amount {
            if self.processing.can_refund_offline(&order) {
                match self.processing.refund_offline(&mut order).await {
                    Ok(()) => {
                        tracing::info!(order_id = %order.id, "Order refunded");
                        return Ok(ProcessWebhookResult::OrderRefunded { order_id: order.id });
                    }
                    Err(e) if already_applied(&e) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        } else if self.processing.can_partially_refund_offline(&order, amount) {
            match self
                .processing
                .partially_refund_offline(&mut order, amount)
                .await
            {
                Ok(()) => {
                    tracing::info!(order_id = %order.id, amount = %amount, "Order partially refunded");
                    return Ok(ProcessWebhookResult::OrderPartiallyRefunded {
                        order_id: order.id,
                        amount,
                    });
                }
                Err(e) if already_applied(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(ProcessWebhookResult::RefundNoted { order_id: order.id })
    }

    /// Finds the live order named by `payment.id`.
    ///
    /// The inner `Err` is a no-op reason; the outer one a hard failure.
    async fn resolve_order(
        &self,
        envelope: &CallbackEnvelope,
    ) -> Result<Result<(OrderGuid, Order), IgnoreReason>, WebhookError> {
        let Some(guid) = envelope.order_guid() else {
            return Ok(Err(IgnoreReason::NotAnOrderPayment));
        };

        let order = self
            .orders
            .find_by_guid(&guid)
            .await?
            .ok_or(WebhookError::OrderNotFound(guid))?;

        if order.deleted {
            return Ok(Err(IgnoreReason::OrderDeleted));
        }
        Ok(Ok((guid, order)))
    }

    async fn record_refund_note(
        &self,
        order: &Order,
        operation: &CallbackOperation,
        amount: Decimal,
        currency: Option<&str>,
    ) -> Result<(), WebhookError> {
        let note = operation.refund_note(amount, currency.unwrap_or_default());
        self.orders
            .insert_note(OrderNote::internal(order.id, note))
            .await?;
        Ok(())
    }
}

/// The store rejected the transition against its current state, which means
/// a concurrent delivery got there first.
fn already_applied(err: &DomainError) -> bool {
    err.code == ErrorCode::InvalidStateTransition
}
