//! Order repository port.
//!
//! The store owns orders; the integration looks them up by the payment
//! correlation guid, persists payment changes and appends notes.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderGuid, OrderId};
use crate::domain::store::{Order, OrderNote};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by the guid sent to the gateway as `payment_id`.
    ///
    /// Deleted orders are returned; callers decide how to treat them.
    async fn find_by_guid(&self, guid: &OrderGuid) -> Result<Option<Order>, DomainError>;

    /// Find an order by its store number.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Persist changes to an existing order.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if the order does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, order: &Order) -> Result<(), DomainError>;

    /// Append a note to an order.
    async fn insert_note(&self, note: OrderNote) -> Result<(), DomainError>;
}
