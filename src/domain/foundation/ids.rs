//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Correlation identifier shared by an order and its gateway payment.
///
/// Sent as `payment_id` in the redirect flow and echoed back by the
/// gateway in `payment.id` of every callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderGuid(Uuid);

impl OrderGuid {
    /// Creates a new random OrderGuid.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an OrderGuid from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderGuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderGuid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Declares an integer identifier owned by the store.
macro_rules! store_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|e| {
                    ValidationError::invalid_format(stringify!($name), e.to_string())
                })
            }
        }
    };
}

store_id!(
    /// Store order number.
    OrderId
);
store_id!(
    /// Store customer number.
    CustomerId
);
store_id!(
    /// Store address book entry.
    AddressId
);
store_id!(
    /// Country reference.
    CountryId
);
store_id!(
    /// State or province reference.
    StateProvinceId
);
store_id!(
    /// Currency reference.
    CurrencyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_guid_parses_hyphenated_uuid() {
        let guid: OrderGuid = "7b0c3f0e-4d2f-4bb3-9c51-3f5d5f1b2e10".parse().unwrap();
        assert_eq!(guid.to_string(), "7b0c3f0e-4d2f-4bb3-9c51-3f5d5f1b2e10");
    }

    #[test]
    fn order_guid_rejects_order_numbers() {
        assert!("1042".parse::<OrderGuid>().is_err());
        assert!("".parse::<OrderGuid>().is_err());
    }

    #[test]
    fn order_guid_new_is_unique() {
        assert_ne!(OrderGuid::new(), OrderGuid::new());
    }

    #[test]
    fn store_id_round_trips_through_display() {
        let id: CustomerId = " 17 ".parse().unwrap();
        assert_eq!(id, CustomerId::new(17));
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn store_id_rejects_non_numeric() {
        let err = "abc".parse::<OrderId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn order_guid_serializes_transparently() {
        let guid = OrderGuid::new();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{}\"", guid));
    }
}
