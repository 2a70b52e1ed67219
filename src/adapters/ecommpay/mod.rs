//! ECOMMPAY gateway adapters.
//!
//! - `EcommpayApiClient` calls the live or sandbox gateway API
//! - `MockPaymentGateway` answers from queued replies in tests

mod api_client;
mod mock_gateway;

pub use api_client::{EcommpayApiClient, EcommpayApiConfig};
pub use mock_gateway::MockPaymentGateway;
