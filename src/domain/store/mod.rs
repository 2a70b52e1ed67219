//! Store records the integration reads and updates.

mod customer;
mod directory;
mod order;

pub use customer::{Address, Customer, CustomerFieldSettings};
pub use directory::{Country, Currency, StateProvince};
pub use order::{Order, OrderNote, PaymentStatus};
