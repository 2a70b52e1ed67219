//! CreateEmbeddedPaymentPageHandler - Builds the payment page embedded into checkout.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::OrderGuid;
use crate::domain::payment_page::{params, PaymentPage};
use crate::ports::{CustomerDirectory, ShoppingCart};

use super::errors::PaymentPageError;
use super::page_builder::PaymentPageBuilder;

/// Build the payment page for the current session's cart.
#[derive(Debug, Clone, Default)]
pub struct CreateEmbeddedPaymentPageCommand;

/// Signed widget parameters.
#[derive(Debug, Clone)]
pub struct EmbeddedPaymentPage {
    pub page: PaymentPage,

    /// Correlation id sent as `payment_id`. The store must use it as the
    /// guid of the order it places for this checkout.
    pub payment_id: OrderGuid,
}

/// Handler for the embedded checkout flow.
///
/// Runs before an order exists, so every request gets a fresh correlation
/// id and the amount comes from the cart.
pub struct CreateEmbeddedPaymentPageHandler {
    builder: PaymentPageBuilder,
    customers: Arc<dyn CustomerDirectory>,
    cart: Arc<dyn ShoppingCart>,
}

impl CreateEmbeddedPaymentPageHandler {
    pub fn new(builder: PaymentPageBuilder, cart: Arc<dyn ShoppingCart>) -> Self {
        Self {
            customers: builder.customers.clone(),
            builder,
            cart,
        }
    }

    pub async fn handle(
        &self,
        _cmd: CreateEmbeddedPaymentPageCommand,
    ) -> Result<EmbeddedPaymentPage, PaymentPageError> {
        let mut ctx = self.builder.start().await?;

        let customer = self
            .customers
            .current_customer()
            .await?
            .ok_or_else(|| PaymentPageError::precondition("Cannot get the current customer."))?;

        let items = self.cart.items(&customer.id).await?;
        if items.is_empty() {
            return Err(PaymentPageError::precondition("Cart is empty."));
        }
        let total = self
            .cart
            .cart_total(&items)
            .await?
            .filter(|total| *total > Decimal::ZERO)
            .ok_or_else(|| PaymentPageError::precondition("Cart total should be greater than 0."))?;

        let payment_id = OrderGuid::new();

        PaymentPageBuilder::push_customer(&mut ctx.query, &customer);
        ctx.query.push(params::PAYMENT_ID, payment_id.to_string());
        PaymentPageBuilder::push_amount(&mut ctx.query, total)?;
        ctx.query.push(params::TARGET_ELEMENT, params::PAYMENT_CONTAINER);

        let billing_address = self.customers.billing_address(&customer).await?;
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
            .sign(&ctx.credential.signer(), self.builder.endpoints.embedded().clone());

        tracing::debug!(
            customer_id = %customer.id,
            payment_id = %payment_id,
            "Embedded payment page prepared"
        );

        Ok(EmbeddedPaymentPage { page, payment_id })
    }
}
