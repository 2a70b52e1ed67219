//! Public storefront URLs the gateway sends customers back to.

use crate::domain::foundation::OrderId;

pub trait StoreRoutes: Send + Sync {
    /// Customer-facing order details page.
    fn order_details_url(&self, order_id: OrderId) -> String;

    /// Page shown after a successful checkout.
    fn checkout_completed_url(&self, order_id: OrderId) -> String;
}
