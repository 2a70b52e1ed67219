//! In-memory shopping carts keyed by customer.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::{CartItem, ShoppingCart};

/// Carts whose total is the sum of their lines.
#[derive(Default)]
pub struct InMemoryShoppingCart {
    carts: RwLock<HashMap<CustomerId, Vec<CartItem>>>,
}

impl InMemoryShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&self, customer_id: CustomerId, items: Vec<CartItem>) {
        self.carts
            .write()
            .expect("InMemoryShoppingCart: carts lock poisoned")
            .insert(customer_id, items);
    }
}

#[async_trait]
impl ShoppingCart for InMemoryShoppingCart {
    async fn items(&self, customer_id: &CustomerId) -> Result<Vec<CartItem>, DomainError> {
        let carts = self
            .carts
            .read()
            .map_err(|_| DomainError::database("carts lock poisoned"))?;
        Ok(carts.get(customer_id).cloned().unwrap_or_default())
    }

    async fn cart_total(&self, items: &[CartItem]) -> Result<Option<Decimal>, DomainError> {
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.cart_subtotal(items).await?))
    }

    async fn cart_subtotal(&self, items: &[CartItem]) -> Result<Decimal, DomainError> {
        Ok(items.iter().map(CartItem::line_total).sum())
    }
}
