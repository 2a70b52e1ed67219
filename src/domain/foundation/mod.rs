//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, money conversions, timestamps and the error types
//! that every store-facing port speaks.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AddressId, CountryId, CurrencyId, CustomerId, OrderGuid, OrderId, StateProvinceId};
pub use money::{from_minor_units, to_minor_units};
pub use timestamp::Timestamp;
