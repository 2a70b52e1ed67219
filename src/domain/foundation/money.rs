//! Currency amount conversions between store and gateway units.
//!
//! The store keeps decimal major-unit amounts. The gateway wire format uses
//! integer minor units (amount × 100).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::ValidationError;

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Converts a major-unit amount to gateway minor units.
///
/// Half-cents round away from zero.
pub fn to_minor_units(amount: Decimal) -> Result<i64, ValidationError> {
    (amount * Decimal::from(MINOR_UNITS_PER_MAJOR))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| ValidationError::invalid_format("amount", "exceeds gateway range"))
}

/// Converts gateway minor units back to a two-decimal major-unit amount.
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}
