//! Shopping cart and totals calculation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CustomerId, DomainError};

/// A line of the customer's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[async_trait]
pub trait ShoppingCart: Send + Sync {
    async fn items(&self, customer_id: &CustomerId) -> Result<Vec<CartItem>, DomainError>;

    /// Order total for the cart, `None` when it cannot be calculated yet.
    async fn cart_total(&self, items: &[CartItem]) -> Result<Option<Decimal>, DomainError>;

    /// Sum of the item lines, before shipping, tax and fees.
    async fn cart_subtotal(&self, items: &[CartItem]) -> Result<Decimal, DomainError>;
}
