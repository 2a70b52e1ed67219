//! Store payment operations the gateway integration does not offer.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UnsupportedOperation {
    #[error("Capture method not supported")]
    Capture,

    #[error("Void method not supported")]
    Void,

    #[error("Recurring payment not supported")]
    RecurringPayment,

    #[error("Recurring payment cancellation not supported")]
    CancelRecurringPayment,
}

impl UnsupportedOperation {
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

pub fn capture() -> Result<(), UnsupportedOperation> {
    Err(UnsupportedOperation::Capture)
}

pub fn void() -> Result<(), UnsupportedOperation> {
    Err(UnsupportedOperation::Void)
}

pub fn process_recurring_payment() -> Result<(), UnsupportedOperation> {
    Err(UnsupportedOperation::RecurringPayment)
}

pub fn cancel_recurring_payment() -> Result<(), UnsupportedOperation> {
    Err(UnsupportedOperation::CancelRecurringPayment)
}
