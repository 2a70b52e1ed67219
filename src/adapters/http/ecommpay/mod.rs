//! HTTP adapter for the gateway endpoints.
//!
//! - `POST /ecommpay/callback` - Gateway callbacks
//! - `GET /ecommpay/orders/:order_id/pay` - Payment page redirect
//! - `POST /ecommpay/orders/:order_id/refund` - Merchant refunds

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PaymentAppState;
pub use routes::ecommpay_router;
