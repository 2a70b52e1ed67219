//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, money, timestamps, errors)
//! - `signing` - Canonical flattening and HMAC-SHA512 signatures
//! - `settings` - Payment method settings and credential validation
//! - `store` - Orders, customers and reference data owned by the store
//! - `payment_page` - Payment page query model and optional enrichment
//! - `refund` - Refund request sent to the gateway API
//! - `webhook` - Callback payload received from the gateway

pub mod foundation;
pub mod payment_page;
pub mod refund;
pub mod settings;
pub mod signing;
pub mod store;
pub mod webhook;
