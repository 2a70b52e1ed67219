//! CreateRedirectPaymentPageHandler - Builds the payment page opened in a new tab.

use std::sync::Arc;

use crate::domain::payment_page::{params, PaymentPage};
use crate::domain::store::Order;
use crate::ports::{CustomerDirectory, StoreRoutes};

use super::errors::PaymentPageError;
use super::page_builder::PaymentPageBuilder;

/// Build the payment page for a placed order.
#[derive(Debug, Clone)]
pub struct CreateRedirectPaymentPageCommand {
    pub order: Order,
}

/// Handler for the redirect checkout flow.
///
/// The order guid is the `payment_id`, so retries for the same order carry
/// the same correlation id.
pub struct CreateRedirectPaymentPageHandler {
    builder: PaymentPageBuilder,
    customers: Arc<dyn CustomerDirectory>,
    routes: Arc<dyn StoreRoutes>,
}

impl CreateRedirectPaymentPageHandler {
    pub fn new(builder: PaymentPageBuilder, routes: Arc<dyn StoreRoutes>) -> Self {
        Self {
            customers: builder.customers.clone(),
            builder,
            routes,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateRedirectPaymentPageCommand,
    ) -> Result<PaymentPage, PaymentPageError> {
        let order = cmd.order;
        let mut ctx = self.builder.start().await?;

        let customer = self
            .customers
            .customer_by_id(&order.customer_id)
            .await?
            .ok_or_else(|| {
                PaymentPageError::precondition(format!(
                    "The customer with id '{}' not found.",
                    order.customer_id
                ))
            })?;

        let details_url = self.routes.order_details_url(order.id);

        PaymentPageBuilder::push_customer(&mut ctx.query, &customer);
        ctx.query.push(params::PAYMENT_ID, order.guid.to_string());
        PaymentPageBuilder::push_amount(&mut ctx.query, order.order_total)?;
        ctx.query.push(params::REDIRECT, "1");
        ctx.query.push(
            params::MERCHANT_SUCCESS_URL,
            self.routes.checkout_completed_url(order.id),
        );
        ctx.query.push(params::MERCHANT_FAIL_URL, details_url.clone());
        ctx.query.push(params::MERCHANT_RETURN_URL, details_url);

        let billing_address = match order.billing_address_id {
            Some(id) => self.customers.address_by_id(&id).await?,
            None => None,
        };
        self.builder
            .append_additional_parameters(
                &mut ctx.query,
                &ctx.settings,
                &customer,
                billing_address.as_ref(),
            )
            .await?;

        let page = ctx
            .query
            .sign(&ctx.credential.signer(), self.builder.endpoints.redirect().clone());

        tracing::debug!(
            order_id = %order.id,
            payment_id = %order.guid,
            "Redirect payment page prepared"
        );

        Ok(page)
    }
}
