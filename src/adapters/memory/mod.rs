//! In-memory store adapters.
//!
//! Back the sandbox server and the test suites. Data lives for the life of
//! the process.

mod cart;
mod customers;
mod directory;
mod orders;
mod routes;
mod settings;

pub use cart::InMemoryShoppingCart;
pub use customers::InMemoryCustomerDirectory;
pub use directory::InMemoryStoreDirectory;
pub use orders::InMemoryOrderStore;
pub use routes::BaseUrlStoreRoutes;
pub use settings::InMemorySettingsProvider;
