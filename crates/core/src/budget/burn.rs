//! Burn-rate projection for the current month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::month::{days_in_month, same_month};
use super::types::{BurnRateStats, BurnStatus};
use crate::currency::round_money;
use crate::ledger::Transaction;

/// Computes the burn-rate snapshot for the month containing `today`.
///
/// `today` is injected rather than read from the wall clock so the
/// calculation stays deterministic; callers pass the current date at the
/// boundary. Undated transactions belong to no month and are ignored.
///
/// Degenerate inputs produce defined results, never errors: an empty
/// transaction set spends zero, a non-positive `limit` pins
/// `percent_used` to zero, and a month's final day yields a zero
/// `daily_limit`.
#[must_use]
pub fn calculate_burn_rate(
    transactions: &[Transaction],
    limit: Decimal,
    today: NaiveDate,
) -> BurnRateStats {
    let total_spent: Decimal = transactions
        .iter()
        .filter(|t| t.date.is_some_and(|d| same_month(d, today)))
        .map(|t| t.amount_reference)
        .sum();

    let remaining = limit - total_spent;

    let days_left = days_in_month(today).saturating_sub(today.day());
    let daily_limit = if days_left == 0 {
        Decimal::ZERO
    } else {
        remaining / Decimal::from(days_left)
    };

    // Capped at 100 for display; `remaining` above stays uncapped.
    let percent_used = if limit <= Decimal::ZERO {
        0
    } else {
        (total_spent / limit * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_u32()
            .map_or(100, |p| p.min(100))
    };

    let status = if remaining < Decimal::ZERO {
        BurnStatus::Critical
    } else if remaining < limit * Decimal::new(1, 1) {
        BurnStatus::Warning
    } else {
        BurnStatus::Ok
    };

    BurnRateStats {
        total_spent: round_money(total_spent),
        remaining: round_money(remaining),
        days_left,
        daily_limit: round_money(daily_limit),
        percent_used,
        status,
    }
}
