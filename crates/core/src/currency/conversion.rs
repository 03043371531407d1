//! Currency normalization.
//!
//! Rounding strategy for money:
//! - Always round to 2 decimal places
//! - Use banker's rounding (round half to even)
//! - Store both original and converted amounts

use rust_decimal::{Decimal, RoundingStrategy};

use super::rates::RateTable;

/// Rounds a monetary value to 2 decimal places using banker's rounding.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Converts an amount in `currency` to the reference currency.
///
/// Looks the code up in `rates` (unknown codes convert 1:1, see
/// [`RateTable::rate`]) and rounds the result to 2 decimal places.
#[must_use]
pub fn normalize(amount: Decimal, currency: &str, rates: &RateTable) -> Decimal {
    round_money(amount * rates.rate(currency))
}
