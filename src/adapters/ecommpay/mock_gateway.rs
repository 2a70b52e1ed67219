//! Mock payment gateway for testing.
//!
//! Records every request and answers from a queue of configured responses.
//! With nothing queued it acknowledges with `{"status":"success"}`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::refund::{CreateRefundRequest, CreateRefundResponse};
use crate::ports::{GatewayError, PaymentGateway};

type RefundReply = Result<Option<CreateRefundResponse>, GatewayError>;

#[derive(Default)]
struct MockState {
    refund_replies: VecDeque<RefundReply>,
    refund_requests: Vec<CreateRefundRequest>,
}

#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queues the reply for the next `create_refund` call.
    pub fn push_refund_reply(&self, reply: RefundReply) {
        self.inner.lock().unwrap().refund_replies.push_back(reply);
    }

    /// Next refund call gets an empty body.
    pub fn respond_with_nothing(&self) {
        self.push_refund_reply(Ok(None));
    }

    pub fn fail_with(&self, error: GatewayError) {
        self.push_refund_reply(Err(error));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn refund_requests(&self) -> Vec<CreateRefundRequest> {
        self.inner.lock().unwrap().refund_requests.clone()
    }

    pub fn refund_call_count(&self) -> usize {
        self.inner.lock().unwrap().refund_requests.len()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_refund(&self, request: &CreateRefundRequest) -> RefundReply {
        let mut state = self.inner.lock().unwrap();
        state.refund_requests.push(request.clone());
        state.refund_replies.pop_front().unwrap_or_else(|| {
            Ok(Some(CreateRefundResponse {
                status: Some("success".to_string()),
            }))
        })
    }
}
