//! HTTP adapters - REST API implementations.

pub mod ecommpay;

pub use ecommpay::{ecommpay_router, PaymentAppState};
