//! Gateway callback model.

mod envelope;

pub use envelope::{
    CallbackEnvelope, CallbackOperation, CallbackPayment, OperationType, TransactionSum,
};
