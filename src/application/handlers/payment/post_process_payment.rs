//! PostProcessPaymentHandler - Where to send the customer after placing an order.

use std::sync::Arc;

use url::Url;

use crate::domain::foundation::DomainError;
use crate::domain::settings::PaymentFlowType;
use crate::domain::store::Order;
use crate::ports::{SettingsProvider, StoreRoutes};

use super::create_redirect_payment_page::{
    CreateRedirectPaymentPageCommand, CreateRedirectPaymentPageHandler,
};

/// Shown to the customer when the payment page cannot be built.
pub const PAYMENT_PAGE_FAILURE_MESSAGE: &str =
    "Error when processing the payment transaction. Please try again or contact with store owner.";

#[derive(Debug, Clone)]
pub struct PostProcessPaymentCommand {
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessOutcome {
    /// Embedded flow; the customer already paid inside checkout.
    NotApplicable,

    RedirectToPaymentPage(Url),

    RedirectToOrderDetails { url: String, message: String },
}

pub struct PostProcessPaymentHandler {
    settings: Arc<dyn SettingsProvider>,
    routes: Arc<dyn StoreRoutes>,
    pages: CreateRedirectPaymentPageHandler,
}

impl PostProcessPaymentHandler {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        routes: Arc<dyn StoreRoutes>,
        pages: CreateRedirectPaymentPageHandler,
    ) -> Self {
        Self {
            settings,
            routes,
            pages,
        }
    }

    pub async fn handle(
        &self,
        cmd: PostProcessPaymentCommand,
    ) -> Result<PostProcessOutcome, DomainError> {
        let settings = self.settings.payment_settings().await?;
        if settings.flow_type != PaymentFlowType::NewBrowserTab {
            return Ok(PostProcessOutcome::NotApplicable);
        }

        let order_id = cmd.order.id;
        match self
            .pages
            .handle(CreateRedirectPaymentPageCommand { order: cmd.order })
            .await
        {
            Ok(page) => Ok(PostProcessOutcome::RedirectToPaymentPage(page.url())),
            Err(e) => {
                tracing::error!(
                    order_id = %order_id,
                    errors = %e.messages().join("\n"),
                    "Failed to build payment page"
                );
                Ok(PostProcessOutcome::RedirectToOrderDetails {
                    url: self.routes.order_details_url(order_id),
                    message: PAYMENT_PAGE_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }
}
