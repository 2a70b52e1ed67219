//! Order aggregate as seen by the payment integration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    AddressId, CustomerId, DomainError, OrderGuid, OrderId, Timestamp,
};

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Authorized,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::PartiallyRefunded => "PartiallyRefunded",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Voided => "Voided",
        };
        f.write_str(s)
    }
}

/// A placed order.
///
/// The integration never creates or deletes orders. It only moves the
/// payment status and records the capture transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub guid: OrderGuid,
    pub custom_order_number: String,
    pub customer_id: CustomerId,
    pub billing_address_id: Option<AddressId>,
    pub order_total: Decimal,
    pub refunded_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub capture_transaction_id: Option<String>,
    pub deleted: bool,
    pub created_on: Timestamp,
}

impl Order {
    /// Creates a pending order placed now.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        order_total: Decimal,
    ) -> Self {
        Self {
            id,
            guid: OrderGuid::new(),
            custom_order_number: id.to_string(),
            customer_id,
            billing_address_id: None,
            order_total,
            refunded_amount: Decimal::ZERO,
            payment_status: PaymentStatus::Pending,
            capture_transaction_id: None,
            deleted: false,
            created_on: Timestamp::now(),
        }
    }

    pub fn can_mark_as_paid(&self) -> bool {
        !matches!(
            self.payment_status,
            PaymentStatus::Paid
                | PaymentStatus::PartiallyRefunded
                | PaymentStatus::Refunded
                | PaymentStatus::Voided
        )
    }

    pub fn can_refund_offline(&self) -> bool {
        self.order_total > Decimal::ZERO
            && self.refunded_amount == Decimal::ZERO
            && self.payment_status == PaymentStatus::Paid
    }

    pub fn can_partially_refund_offline(&self, amount: Decimal) -> bool {
        if self.order_total <= Decimal::ZERO || amount <= Decimal::ZERO {
            return false;
        }
        if amount + self.refunded_amount > self.order_total {
            return false;
        }
        matches!(
            self.payment_status,
            PaymentStatus::Paid | PaymentStatus::PartiallyRefunded
        )
    }

    pub fn mark_as_paid(&mut self) -> Result<(), DomainError> {
        if !self.can_mark_as_paid() {
            return Err(DomainError::invalid_transition(
                self.payment_status,
                "mark order as paid",
            ));
        }
        self.payment_status = PaymentStatus::Paid;
        Ok(())
    }

    pub fn refund_offline(&mut self) -> Result<(), DomainError> {
        if !self.can_refund_offline() {
            return Err(DomainError::invalid_transition(
                self.payment_status,
                "refund order",
            ));
        }
        self.refunded_amount = self.order_total;
        self.payment_status = PaymentStatus::Refunded;
        Ok(())
    }

    pub fn partially_refund_offline(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if !self.can_partially_refund_offline(amount) {
            return Err(DomainError::invalid_transition(
                self.payment_status,
                "partially refund order",
            ));
        }
        self.refunded_amount += amount;
        self.payment_status = if self.refunded_amount == self.order_total {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };
        Ok(())
    }
}

/// Merchant-facing note attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderNote {
    pub order_id: OrderId,
    pub note: String,
    pub display_to_customer: bool,
    pub created_on: Timestamp,
}

impl OrderNote {
    /// Creates a note hidden from the customer.
    pub fn internal(order_id: OrderId, note: impl Into<String>) -> Self {
        Self {
            order_id,
            note: note.into(),
            display_to_customer: false,
            created_on: Timestamp::now(),
        }
    }
}
