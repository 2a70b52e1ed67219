//! Webhook handlers.
//!
//! ## Commands
//! - Reconciling gateway callbacks with order payment state

mod process_webhook;

pub use process_webhook::{
    IgnoreReason, ProcessWebhookCommand, ProcessWebhookHandler, ProcessWebhookResult,
    WebhookError,
};
