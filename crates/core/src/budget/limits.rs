//! Per-category limit checks.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::month::same_month;
use super::types::{CategoryStatus, LimitStatus};
use crate::currency::round_money;
use crate::ledger::{BudgetRule, Transaction};

/// Compares this month's spend against each category ceiling.
///
/// The rule set drives the output: every rule yields exactly one row, in
/// rule order, with `spent = 0` when nothing matched; spend in a category
/// without a rule is not reported. The month filter is applied here
/// independently of the burn-rate calculation, through the same helper.
///
/// Returns an empty vec when either input is empty.
#[must_use]
pub fn check_category_limits(
    transactions: &[Transaction],
    rules: &[BudgetRule],
    today: NaiveDate,
) -> Vec<CategoryStatus> {
    if transactions.is_empty() || rules.is_empty() {
        return Vec::new();
    }

    let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
    for transaction in transactions
        .iter()
        .filter(|t| t.date.is_some_and(|d| same_month(d, today)))
    {
        *spent_by_category
            .entry(transaction.category.as_str())
            .or_insert(Decimal::ZERO) += transaction.amount_reference;
    }

    rules
        .iter()
        .map(|rule| {
            let spent = spent_by_category
                .get(rule.category.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let remaining = rule.monthly_limit - spent;
            let status = if remaining < Decimal::ZERO {
                LimitStatus::Exceeded
            } else {
                LimitStatus::Ok
            };
            CategoryStatus {
                category: rule.category.clone(),
                spent: round_money(spent),
                monthly_limit: rule.monthly_limit,
                remaining: round_money(remaining),
                status,
            }
        })
        .collect()
}
