//! Refund handlers.
//!
//! ## Commands
//! - Submitting full and partial refunds to the gateway

mod refund_order;

pub use refund_order::{
    RefundError, RefundOrderCommand, RefundOrderHandler, RefundOrderResult, REFUND_SENT_MESSAGE,
};
