//! Callback endpoint wiring over HTTP.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;
use tower::ServiceExt;

use common::{sign_body, TestStore, SECRET};
use ecommpay_gateway::adapters::http::ecommpay_router;
use ecommpay_gateway::domain::store::PaymentStatus;

fn post_callback(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ecommpay/callback")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn ignored_operation_is_acknowledged_with_200() {
    let store = TestStore::new();
    let app = ecommpay_router().with_state(store.app_state());

    let body = sign_body(
        json!({ "operation": { "type": "payout", "status": "success" } }),
        SECRET,
    );
    let response = app.oneshot(post_callback(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsigned_body_is_rejected_with_400() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Pending);
    let app = ecommpay_router().with_state(store.app_state());

    let body = json!({
        "payment": { "id": order.guid.to_string() },
        "operation": { "type": "sale", "status": "success" }
    })
    .to_string()
    .into_bytes();
    let response = app.oneshot(post_callback(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        store.orders.get(order.id).unwrap().payment_status,
        PaymentStatus::Pending
    );
}

#[tokio::test]
async fn empty_body_is_rejected_with_400() {
    let store = TestStore::new();
    let app = ecommpay_router().with_state(store.app_state());

    let response = app.oneshot(post_callback(Vec::new())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
