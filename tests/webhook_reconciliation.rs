//! Callback reconciliation against the in-memory store.

mod common;

use rust_decimal::Decimal;
use serde_json::json;

use common::{TestStore, SECRET};
use ecommpay_gateway::application::handlers::webhook::{
    IgnoreReason, ProcessWebhookResult, WebhookError,
};
use ecommpay_gateway::domain::store::PaymentStatus;

fn sale_callback(payment_id: &str) -> serde_json::Value {
    json!({
        "project_id": 112,
        "payment": { "id": payment_id, "status": "success" },
        "operation": {
            "id": 4711,
            "type": "sale",
            "status": "success",
            "date": "2024-03-01T10:15:00+0000",
            "code": "0",
            "message": "Success",
            "sum_initial": { "amount": 1000, "currency": "USD" }
        }
    })
}

fn refund_callback(payment_id: &str, status: &str, amount: i64) -> serde_json::Value {
    json!({
        "project_id": 112,
        "payment": { "id": payment_id },
        "operation": {
            "type": "refund",
            "status": status,
            "code": 0,
            "message": "Success",
            "sum_initial": { "amount": amount, "currency": "USD" }
        }
    })
}

#[tokio::test]
async fn successful_sale_marks_order_paid_with_capture_id() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Pending);
    let guid = order.guid.to_string();

    let result = store.deliver(sale_callback(&guid), SECRET).await.unwrap();

    assert_eq!(result, ProcessWebhookResult::OrderMarkedPaid { order_id: order.id });
    let stored = store.orders.get(order.id).unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Paid);
    assert_eq!(stored.capture_transaction_id.as_deref(), Some(guid.as_str()));
}

#[tokio::test]
async fn callback_signed_with_another_secret_changes_nothing() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Pending);

    let err = store
        .deliver(sale_callback(&order.guid.to_string()), "some-other-secret")
        .await
        .unwrap_err();

    assert_eq!(err, WebhookError::InvalidSignature);
    assert!(err.messages()[0].contains("signature"));
    assert_eq!(store.orders.get(order.id).unwrap(), order);
}

#[tokio::test]
async fn duplicate_sale_delivery_transitions_once() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Pending);
    let body = sale_callback(&order.guid.to_string());

    store.deliver(body.clone(), SECRET).await.unwrap();
    let second = store.deliver(body, SECRET).await.unwrap();

    assert_eq!(second, ProcessWebhookResult::Ignored(IgnoreReason::AlreadyPaid));
    assert_eq!(store.orders.transition_count(), 1);
}

#[tokio::test]
async fn duplicate_sales_delivered_together_transition_once() {
    let store = std::sync::Arc::new(TestStore::new());
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Pending);
    let body = sale_callback(&order.guid.to_string());

    let (a, b) = tokio::join!(
        store.deliver(body.clone(), SECRET),
        store.deliver(body, SECRET)
    );

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(store.orders.transition_count(), 1);
}

#[tokio::test]
async fn half_refund_takes_partial_path_and_records_note() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Paid);

    let result = store
        .deliver(refund_callback(&order.guid.to_string(), "success", 500), SECRET)
        .await
        .unwrap();

    assert_eq!(
        result,
        ProcessWebhookResult::OrderPartiallyRefunded {
            order_id: order.id,
            amount: Decimal::new(500, 2),
        }
    );
    let notes = store.orders.notes_for(order.id);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].note.contains("The amount '5.00 USD'."));
}

#[tokio::test]
async fn two_partial_refunds_complete_the_refund() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Paid);
    let guid = order.guid.to_string();

    store
        .deliver(refund_callback(&guid, "success", 400), SECRET)
        .await
        .unwrap();
    store
        .deliver(refund_callback(&guid, "success", 600), SECRET)
        .await
        .unwrap();

    let stored = store.orders.get(order.id).unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Refunded);
    assert_eq!(stored.refunded_amount, Decimal::new(1000, 2));
    assert_eq!(store.orders.notes_for(order.id).len(), 2);
}

#[tokio::test]
async fn full_refund_of_partially_refunded_order_is_noted_only() {
    let store = TestStore::new();
    let order = store.place_order(1, Decimal::new(1000, 2), PaymentStatus::Paid);
    let guid = order.guid.to_string();

    store
        .deliver(refund_callback(&guid, "success", 300), SECRET)
        .await
        .unwrap();
    let result = store
        .deliver(refund_callback(&guid, "success", 1000), SECRET)
        .await
        .unwrap();

    assert_eq!(result, ProcessWebhookResult::RefundNoted { order_id: order.id });
    assert_eq!(
        store.orders.get(order.id).unwrap().payment_status,
        PaymentStatus::PartiallyRefunded
    );
    assert_eq!(store.orders.notes_for(order.id).len(), 2);
}

#[tokio::test]
async fn callback_for_unknown_order_fails() {
    let store = TestStore::new();
    let guid = uuid::Uuid::new_v4().to_string();

    let err = store
        .deliver(refund_callback(&guid, "success", 500), SECRET)
        .await
        .unwrap_err();

    assert!(matches!(err, WebhookError::OrderNotFound(_)));
    assert_eq!(err.status_code(), 400);
}
