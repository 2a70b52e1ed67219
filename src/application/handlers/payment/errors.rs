//! Payment page error types.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Why a payment page could not be built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentPageError {
    /// Settings, currency, customer or cart problems, in the order found.
    #[error("Payment page preconditions failed: {}", .0.join(" "))]
    Precondition(Vec<String>),

    /// A store lookup failed.
    #[error("Store lookup failed: {0}")]
    Infrastructure(String),
}

impl PaymentPageError {
    pub fn precondition(message: impl Into<String>) -> Self {
        PaymentPageError::Precondition(vec![message.into()])
    }

    /// Messages suitable for logs and merchant notifications.
    pub fn messages(&self) -> Vec<String> {
        match self {
            PaymentPageError::Precondition(messages) => messages.clone(),
            PaymentPageError::Infrastructure(message) => vec![message.clone()],
        }
    }
}

impl From<DomainError> for PaymentPageError {
    fn from(err: DomainError) -> Self {
        PaymentPageError::Infrastructure(err.to_string())
    }
}
