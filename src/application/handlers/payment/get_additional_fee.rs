//! GetAdditionalFeeHandler - Handling fee shown at checkout.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::{SettingsProvider, ShoppingCart};

#[derive(Debug, Clone)]
pub struct GetAdditionalFeeQuery {
    pub customer_id: CustomerId,
}

pub struct GetAdditionalFeeHandler {
    settings: Arc<dyn SettingsProvider>,
    cart: Arc<dyn ShoppingCart>,
}

impl GetAdditionalFeeHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, cart: Arc<dyn ShoppingCart>) -> Self {
        Self { settings, cart }
    }

    pub async fn handle(&self, query: GetAdditionalFeeQuery) -> Result<Decimal, DomainError> {
        let settings = self.settings.payment_settings().await?;
        let items = self.cart.items(&query.customer_id).await?;
        let subtotal = self.cart.cart_subtotal(&items).await?;
        Ok(settings.additional_fee_for(subtotal))
    }
}
