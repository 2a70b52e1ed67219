//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ecommpay` - Gateway API client and its test double
//! - `http` - Axum endpoints for callbacks and merchant actions
//! - `memory` - In-memory store adapters

pub mod ecommpay;
pub mod http;
pub mod memory;

pub use ecommpay::{EcommpayApiClient, EcommpayApiConfig, MockPaymentGateway};
pub use http::{ecommpay_router, PaymentAppState};
