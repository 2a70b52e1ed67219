//! Callback payload sent by the gateway after each operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::foundation::{from_minor_units, OrderGuid};

const SUCCESS_STATUS: &str = "success";

/// Parsed callback body. Members the integration does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackEnvelope {
    pub payment: Option<CallbackPayment>,
    pub operation: Option<CallbackOperation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackPayment {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackOperation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: Option<String>,
    pub message: Option<String>,
    pub sum_initial: Option<TransactionSum>,
}

/// Amount in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionSum {
    #[serde(default)]
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

impl TransactionSum {
    pub fn major_amount(&self) -> Option<Decimal> {
        self.amount.map(from_minor_units)
    }
}

/// Operation kinds the reconciler acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationType {
    Sale,
    Refund,
    Unknown(String),
}

impl OperationType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("sale") => OperationType::Sale,
            Some("refund") => OperationType::Refund,
            other => OperationType::Unknown(other.unwrap_or_default().to_string()),
        }
    }
}

impl CallbackEnvelope {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn operation_type(&self) -> OperationType {
        OperationType::parse(self.operation.as_ref().and_then(|o| o.kind.as_deref()))
    }

    /// The order guid carried in `payment.id`, when it is one.
    pub fn order_guid(&self) -> Option<OrderGuid> {
        self.payment
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .and_then(|id| id.parse().ok())
    }

    pub fn is_successful_operation(&self) -> bool {
        self.operation
            .as_ref()
            .and_then(|o| o.status.as_deref())
            .map_or(false, |s| s == SUCCESS_STATUS)
    }
}

impl CallbackOperation {
    /// Audit note recorded for every refund callback.
    pub fn refund_note(&self, amount: Decimal, currency: &str) -> String {
        format!(
            "The refund request is processed with status '{}'.\nThe code '{}'.\nThe message '{}'.\nThe amount '{} {}'.",
            self.status.as_deref().unwrap_or_default(),
            self.code.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default(),
            amount,
            currency
        )
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
