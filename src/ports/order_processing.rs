//! Order payment transitions owned by the store.
//!
//! Every mutation is guarded by its `can_*` predicate. Callers check it
//! first, and implementations evaluate it again against the stored order,
//! failing with `InvalidStateTransition` when a concurrent caller already
//! moved it on.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::DomainError;
use crate::domain::store::Order;

#[async_trait]
pub trait OrderProcessing: Send + Sync {
    fn can_mark_order_as_paid(&self, order: &Order) -> bool;

    /// Marks the order paid and persists it, including any capture
    /// transaction id already set on `order`.
    async fn mark_order_as_paid(&self, order: &mut Order) -> Result<(), DomainError>;

    fn can_refund_offline(&self, order: &Order) -> bool;

    async fn refund_offline(&self, order: &mut Order) -> Result<(), DomainError>;

    fn can_partially_refund_offline(&self, order: &Order, amount: Decimal) -> bool;

    async fn partially_refund_offline(
        &self,
        order: &mut Order,
        amount: Decimal,
    ) -> Result<(), DomainError>;
}
