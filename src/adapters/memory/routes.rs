//! Storefront URLs built from the public base URL.

use url::Url;

use crate::domain::foundation::OrderId;
use crate::ports::StoreRoutes;

pub struct BaseUrlStoreRoutes {
    base_url: Url,
}

impl BaseUrlStoreRoutes {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn path(&self, path: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url.to_string()
    }
}

impl StoreRoutes for BaseUrlStoreRoutes {
    fn order_details_url(&self, order_id: OrderId) -> String {
        self.path(&format!("/orderdetails/{}", order_id))
    }

    fn checkout_completed_url(&self, order_id: OrderId) -> String {
        self.path(&format!("/checkout/completed/{}", order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_absolute_urls() {
        let routes = BaseUrlStoreRoutes::new(Url::parse("https://shop.example.com/").unwrap());

        assert_eq!(
            routes.order_details_url(OrderId::new(42)),
            "https://shop.example.com/orderdetails/42"
        );
        assert_eq!(
            routes.checkout_completed_url(OrderId::new(42)),
            "https://shop.example.com/checkout/completed/42"
        );
    }
}
