//! Axum router configuration for the gateway endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_callback, pay_order, refund_order, PaymentAppState};

/// Create the gateway router.
///
/// # Routes
/// - `POST /ecommpay/callback` - Gateway callbacks (signature verified)
/// - `GET /ecommpay/orders/:order_id/pay` - Redirect to the payment page
/// - `POST /ecommpay/orders/:order_id/refund` - Submit a refund
pub fn ecommpay_router() -> Router<PaymentAppState> {
    Router::new()
        .route("/ecommpay/callback", post(handle_callback))
        .route("/ecommpay/orders/:order_id/pay", get(pay_order))
        .route("/ecommpay/orders/:order_id/refund", post(refund_order))
}
