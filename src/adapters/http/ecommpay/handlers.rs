//! HTTP handlers for the gateway endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::handlers::payment::{
    CreateRedirectPaymentPageHandler, PaymentPageBuilder, PostProcessOutcome,
    PostProcessPaymentCommand, PostProcessPaymentHandler,
};
use crate::application::handlers::refund::{RefundError, RefundOrderCommand, RefundOrderHandler};
use crate::application::handlers::webhook::{
    ProcessWebhookCommand, ProcessWebhookHandler, WebhookError,
};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId};
use crate::domain::payment_page::PaymentPageEndpoints;
use crate::ports::{
    CustomerDirectory, OrderProcessing, OrderRepository, PaymentGateway, SettingsProvider,
    StoreDirectory, StoreRoutes,
};

use super::dto::{ErrorResponse, RefundRequest, RefundResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the gateway endpoints.
#[derive(Clone)]
pub struct PaymentAppState {
    pub settings: Arc<dyn SettingsProvider>,
    pub orders: Arc<dyn OrderRepository>,
    pub processing: Arc<dyn OrderProcessing>,
    pub customers: Arc<dyn CustomerDirectory>,
    pub directory: Arc<dyn StoreDirectory>,
    pub routes: Arc<dyn StoreRoutes>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub endpoints: PaymentPageEndpoints,
}

impl PaymentAppState {
    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.settings.clone(),
            self.orders.clone(),
            self.processing.clone(),
        )
    }

    pub fn refund_handler(&self) -> RefundOrderHandler {
        RefundOrderHandler::new(
            self.settings.clone(),
            self.directory.clone(),
            self.gateway.clone(),
        )
    }

    pub fn post_process_handler(&self) -> PostProcessPaymentHandler {
        let builder = PaymentPageBuilder::new(
            self.settings.clone(),
            self.customers.clone(),
            self.directory.clone(),
            self.endpoints.clone(),
        );
        PostProcessPaymentHandler::new(
            self.settings.clone(),
            self.routes.clone(),
            CreateRedirectPaymentPageHandler::new(builder, self.routes.clone()),
        )
    }

    async fn order(&self, order_id: i64) -> Result<crate::domain::store::Order, ApiError> {
        let id = OrderId::new(order_id);
        self.orders.find_by_id(&id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("The order with id '{}' not found.", id))
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /ecommpay/callback - Gateway operation callback
pub async fn handle_callback(
    State(state): State<PaymentAppState>,
    body: axum::body::Bytes,
) -> impl IntoResponse {
    let cmd = ProcessWebhookCommand {
        payload: body.to_vec(),
    };

    match state.webhook_handler().handle(cmd).await {
        Ok(result) => {
            tracing::debug!(?result, "Callback processed");
            StatusCode::OK
        }
        Err(err) => {
            tracing::error!(errors = %err.messages().join("\n"), "Callback rejected");
            status_for_webhook(&err)
        }
    }
}

fn status_for_webhook(err: &WebhookError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
}

/// GET /ecommpay/orders/:order_id/pay - Send the customer to the payment page
pub async fn pay_order(
    State(state): State<PaymentAppState>,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.order(order_id).await?;
    let outcome = state
        .post_process_handler()
        .handle(PostProcessPaymentCommand { order })
        .await?;

    let location = match outcome {
        PostProcessOutcome::RedirectToPaymentPage(url) => url.to_string(),
        PostProcessOutcome::RedirectToOrderDetails { url, .. } => url,
        PostProcessOutcome::NotApplicable => return Ok(StatusCode::NO_CONTENT.into_response()),
    };
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

/// POST /ecommpay/orders/:order_id/refund - Submit a refund to the gateway
pub async fn refund_order(
    State(state): State<PaymentAppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<RefundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.order(order_id).await?;
    let result = state
        .refund_handler()
        .handle(RefundOrderCommand {
            order,
            amount_to_refund: request.amount,
        })
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(RefundResponse {
            partial: result.partial,
            message: result.message,
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts handler errors to HTTP responses.
pub enum ApiError {
    NotFound(String),
    Refund(RefundError),
    Domain(DomainError),
}

impl From<RefundError> for ApiError {
    fn from(err: RefundError) -> Self {
        Self::Refund(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, errors) = match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorCode::OrderNotFound, vec![message])
            }
            ApiError::Refund(err) => {
                let status = match &err {
                    RefundError::Precondition(_) | RefundError::Signing => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    RefundError::NoResponse(_) | RefundError::Gateway(_) => StatusCode::BAD_GATEWAY,
                    RefundError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let code = match &err {
                    RefundError::Precondition(_) => ErrorCode::ValidationFailed,
                    RefundError::Infrastructure(_) => ErrorCode::DatabaseError,
                    _ => ErrorCode::ExternalServiceError,
                };
                (status, code, err.messages())
            }
            ApiError::Domain(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.code,
                vec![err.message],
            ),
        };

        let body = ErrorResponse::new(code.to_string(), errors);
        (status, Json(body)).into_response()
    }
}
