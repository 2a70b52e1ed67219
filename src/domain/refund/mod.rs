//! Merchant-initiated refund model.

mod request;

pub use request::{
    refund_description, CreateRefundRequest, CreateRefundResponse, RefundGeneral, RefundPayment,
};
