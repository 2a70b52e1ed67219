//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the integration and the store or gateway around it. Adapters implement
//! these ports.
//!
//! ## Store Ports
//!
//! - `OrderRepository` - Order lookup, persistence and notes
//! - `OrderProcessing` - Guarded payment status transitions
//! - `CustomerDirectory` - Customers and their addresses
//! - `StoreDirectory` - Currencies, countries, regions, form settings
//! - `ShoppingCart` - Cart contents and totals
//! - `SettingsProvider` - Payment method settings snapshot
//! - `StoreRoutes` - Storefront return URLs
//!
//! ## Gateway Ports
//!
//! - `PaymentGateway` - Outbound gateway API calls

mod customer_directory;
mod order_processing;
mod order_repository;
mod payment_gateway;
mod settings_provider;
mod shopping_cart;
mod store_directory;
mod store_routes;

pub use customer_directory::CustomerDirectory;
pub use order_processing::OrderProcessing;
pub use order_repository::OrderRepository;
pub use payment_gateway::{ApiError, GatewayError, PaymentGateway, TRANSPORT_FAILURE_STATUS};
pub use settings_provider::SettingsProvider;
pub use shopping_cart::{CartItem, ShoppingCart};
pub use store_directory::StoreDirectory;
pub use store_routes::StoreRoutes;
