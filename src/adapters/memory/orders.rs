//! In-memory order store.
//!
//! Implements both `OrderRepository` and `OrderProcessing`, applying the
//! order's own payment transition rules.
//!
//! # Panics
//!
//! Test helper methods panic if an internal lock is poisoned. Port methods
//! report poisoning as a `DatabaseError` instead.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrderGuid, OrderId};
use crate::domain::store::{Order, OrderNote};
use crate::ports::{OrderProcessing, OrderRepository};

/// Orders and notes held in memory.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
    notes: RwLock<Vec<OrderNote>>,
    transitions: AtomicU32,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an order.
    pub fn insert(&self, order: Order) {
        self.orders
            .write()
            .expect("InMemoryOrderStore: orders lock poisoned")
            .insert(order.id, order);
    }

    // === Test Helpers ===

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders
            .read()
            .expect("InMemoryOrderStore: orders lock poisoned")
            .get(&id)
            .cloned()
    }

    pub fn notes_for(&self, id: OrderId) -> Vec<OrderNote> {
        self.notes
            .read()
            .expect("InMemoryOrderStore: notes lock poisoned")
            .iter()
            .filter(|n| n.order_id == id)
            .cloned()
            .collect()
    }

    /// Number of payment status transitions applied so far.
    pub fn transition_count(&self) -> u32 {
        self.transitions.load(Ordering::SeqCst)
    }

    fn save(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::database("orders lock poisoned"))?;
        match orders.get_mut(&order.id) {
            Some(existing) => {
                *existing = order.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order {} not found", order.id),
            )),
        }
    }

    /// Applies `apply` against the stored payment state under the write lock.
    ///
    /// The caller's copy supplies every other field and is refreshed with
    /// the result, so a stale copy cannot repeat a transition.
    fn transition(
        &self,
        order: &mut Order,
        apply: impl FnOnce(&mut Order) -> Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::database("orders lock poisoned"))?;
        let stored = orders.get_mut(&order.id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order {} not found", order.id),
            )
        })?;

        order.payment_status = stored.payment_status;
        order.refunded_amount = stored.refunded_amount;
        apply(order)?;

        *stored = order.clone();
        self.transitions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderStore {
    async fn find_by_guid(&self, guid: &OrderGuid) -> Result<Option<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::database("orders lock poisoned"))?;
        Ok(orders.values().find(|o| &o.guid == guid).cloned())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::database("orders lock poisoned"))?;
        Ok(orders.get(id).cloned())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        self.save(order)
    }

    async fn insert_note(&self, note: OrderNote) -> Result<(), DomainError> {
        self.notes
            .write()
            .map_err(|_| DomainError::database("notes lock poisoned"))?
            .push(note);
        Ok(())
    }
}

#[async_trait]
impl OrderProcessing for InMemoryOrderStore {
    fn can_mark_order_as_paid(&self, order: &Order) -> bool {
        order.can_mark_as_paid()
    }

    async fn mark_order_as_paid(&self, order: &mut Order) -> Result<(), DomainError> {
        self.transition(order, Order::mark_as_paid)
    }

    fn can_refund_offline(&self, order: &Order) -> bool {
        order.can_refund_offline()
    }

    async fn refund_offline(&self, order: &mut Order) -> Result<(), DomainError> {
        self.transition(order, Order::refund_offline)
    }

    fn can_partially_refund_offline(&self, order: &Order, amount: Decimal) -> bool {
        order.can_partially_refund_offline(amount)
    }

    async fn partially_refund_offline(
        &self,
        order: &mut Order,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        self.transition(order, |o| o.partially_refund_offline(amount))
    }
}
