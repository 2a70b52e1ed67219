//! Payment page request model.

mod endpoints;
mod enrichment;
pub mod params;
mod query;

pub use endpoints::PaymentPageEndpoints;
pub use enrichment::{BillingDetails, PersonalDetails};
pub use query::{PaymentPage, PaymentPageQuery};
