//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Payment page handlers
    CreateEmbeddedPaymentPageCommand, CreateEmbeddedPaymentPageHandler,
    CreateRedirectPaymentPageCommand, CreateRedirectPaymentPageHandler, PaymentPageBuilder,
    PaymentPageError,
    // Refund handlers
    RefundError, RefundOrderCommand, RefundOrderHandler,
    // Webhook handlers
    ProcessWebhookCommand, ProcessWebhookHandler, ProcessWebhookResult, WebhookError,
};
