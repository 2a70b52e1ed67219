//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;
pub mod refund;
pub mod webhook;

pub use payment::{
    CanRepostPaymentHandler, CanRepostPaymentQuery, CreateEmbeddedPaymentPageCommand,
    CreateEmbeddedPaymentPageHandler, CreateRedirectPaymentPageCommand,
    CreateRedirectPaymentPageHandler, EmbeddedPaymentPage, GetAdditionalFeeHandler,
    GetAdditionalFeeQuery, PaymentPageBuilder, PaymentPageError, PostProcessOutcome,
    PostProcessPaymentCommand, PostProcessPaymentHandler, UnsupportedOperation,
};
pub use refund::{RefundError, RefundOrderCommand, RefundOrderHandler, RefundOrderResult};
pub use webhook::{
    IgnoreReason, ProcessWebhookCommand, ProcessWebhookHandler, ProcessWebhookResult,
    WebhookError,
};
