//! CanRepostPaymentHandler - Whether the customer may retry paying an order.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::store::Order;
use crate::ports::SettingsProvider;

/// Minimum age of an order before its payment page may be opened again.
pub const REPOST_DELAY_SECS: i64 = 5;

#[derive(Debug, Clone)]
pub struct CanRepostPaymentQuery {
    pub order: Order,
}

pub struct CanRepostPaymentHandler {
    settings: Arc<dyn SettingsProvider>,
}

impl CanRepostPaymentHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }

    pub async fn handle(&self, query: CanRepostPaymentQuery) -> Result<bool, DomainError> {
        let settings = self.settings.payment_settings().await?;
        if !settings.is_valid() {
            return Ok(false);
        }
        let age = Timestamp::now().duration_since(&query.order.created_on);
        Ok(age.num_seconds() >= REPOST_DELAY_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::payment::test_support::*;
    use rust_decimal::Decimal;

    async fn can_repost(fixture: &Fixture, order: Order) -> bool {
        CanRepostPaymentHandler::new(fixture.settings.clone())
            .handle(CanRepostPaymentQuery { order })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn fresh_order_cannot_be_reposted() {
        let fixture = Fixture::new();
        let order = fixture.order(Decimal::ONE);
        assert!(!can_repost(&fixture, order).await);
    }

    #[tokio::test]
    async fn older_order_can_be_reposted() {
        let fixture = Fixture::new();
        let mut order = fixture.order(Decimal::ONE);
        order.created_on = Timestamp::now().minus_secs(REPOST_DELAY_SECS + 1);
        assert!(can_repost(&fixture, order).await);
    }

    #[tokio::test]
    async fn invalid_configuration_blocks_repost() {
        let fixture = Fixture::new();
        fixture.settings.update(|s| s.test_project_id = Some("abc".into()));
        let mut order = fixture.order(Decimal::ONE);
        order.created_on = Timestamp::now().minus_secs(60);
        assert!(!can_repost(&fixture, order).await);
    }
}
