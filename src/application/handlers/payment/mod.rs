//! Payment handlers.
//!
//! Build signed payment pages and answer the store's payment method
//! questions.
//!
//! ## Commands
//! - Building the embedded page for the current cart
//! - Building the redirect page for a placed order
//! - Post-processing a placed order
//!
//! ## Queries
//! - Additional handling fee
//! - Payment re-post eligibility

mod can_repost_payment;
mod create_embedded_payment_page;
mod create_redirect_payment_page;
mod errors;
mod get_additional_fee;
mod page_builder;
mod post_process_payment;
pub mod unsupported;

#[cfg(test)]
pub(crate) mod test_support;

// Commands
pub use create_embedded_payment_page::{
    CreateEmbeddedPaymentPageCommand, CreateEmbeddedPaymentPageHandler, EmbeddedPaymentPage,
};
pub use create_redirect_payment_page::{
    CreateRedirectPaymentPageCommand, CreateRedirectPaymentPageHandler,
};
pub use post_process_payment::{
    PostProcessOutcome, PostProcessPaymentCommand, PostProcessPaymentHandler,
    PAYMENT_PAGE_FAILURE_MESSAGE,
};

// Queries
pub use can_repost_payment::{CanRepostPaymentHandler, CanRepostPaymentQuery, REPOST_DELAY_SECS};
pub use get_additional_fee::{GetAdditionalFeeHandler, GetAdditionalFeeQuery};

pub use errors::PaymentPageError;
pub use page_builder::PaymentPageBuilder;
pub use unsupported::UnsupportedOperation;
