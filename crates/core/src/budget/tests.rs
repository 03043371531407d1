//! Property-based tests for budget module.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::burn::calculate_burn_rate;
use super::limits::check_category_limits;
use super::types::{BurnStatus, LimitStatus};
use crate::ledger::{BudgetRule, Transaction};

fn eur_transaction(date: NaiveDate, amount_cents: i64) -> Transaction {
    let amount = Decimal::new(amount_cents, 2);
    Transaction {
        date: Some(date),
        amount,
        currency: "EUR".to_string(),
        category: "Other".to_string(),
        description: None,
        amount_reference: amount,
    }
}

fn any_day_in_august() -> impl Strategy<Value = NaiveDate> {
    (1u32..=31).prop_map(|day| NaiveDate::from_ymd_opt(2026, 8, day).unwrap())
}

proptest! {
    /// remaining = limit - spend, for any month-resident spend and positive limit.
    #[test]
    fn test_remaining_is_limit_minus_spend(
        amounts in prop::collection::vec(1i64..=500_000, 0..20),
        limit_cents in 1i64..=1_000_000,
        today in any_day_in_august(),
    ) {
        let transactions: Vec<Transaction> = amounts
            .iter()
            .map(|&cents| eur_transaction(today, cents))
            .collect();
        let limit = Decimal::new(limit_cents, 2);
        let total: Decimal = amounts.iter().map(|&cents| Decimal::new(cents, 2)).sum();

        let stats = calculate_burn_rate(&transactions, limit, today);

        prop_assert_eq!(stats.total_spent, total);
        prop_assert_eq!(stats.remaining, limit - total);
    }

    /// Status boundaries: Critical iff remaining < 0, Warning iff
    /// 0 <= remaining < 0.1 * limit, Ok otherwise.
    #[test]
    fn test_status_boundaries(
        spent_cents in 0i64..=2_000_000,
        limit_cents in 1i64..=1_000_000,
        today in any_day_in_august(),
    ) {
        let transactions = vec![eur_transaction(today, spent_cents)];
        let limit = Decimal::new(limit_cents, 2);

        let stats = calculate_burn_rate(&transactions, limit, today);

        let remaining = limit - Decimal::new(spent_cents, 2);
        if remaining < Decimal::ZERO {
            prop_assert_eq!(stats.status, BurnStatus::Critical);
        } else if remaining < limit * dec!(0.1) {
            prop_assert_eq!(stats.status, BurnStatus::Warning);
        } else {
            prop_assert_eq!(stats.status, BurnStatus::Ok);
        }
    }

    /// percent_used never exceeds 100 even when remaining is negative.
    #[test]
    fn test_percent_capped_at_100(
        spent_cents in 0i64..=5_000_000,
        limit_cents in 1i64..=1_000_000,
        today in any_day_in_august(),
    ) {
        let transactions = vec![eur_transaction(today, spent_cents)];
        let limit = Decimal::new(limit_cents, 2);

        let stats = calculate_burn_rate(&transactions, limit, today);

        prop_assert!(stats.percent_used <= 100);
        if Decimal::new(spent_cents, 2) > limit {
            prop_assert_eq!(stats.percent_used, 100);
            prop_assert!(stats.remaining < Decimal::ZERO);
        }
    }

    /// Non-positive limits pin percent_used to zero instead of dividing.
    #[test]
    fn test_nonpositive_limit_yields_zero_percent(
        spent_cents in 0i64..=1_000_000,
        limit_cents in -1_000_000i64..=0,
        today in any_day_in_august(),
    ) {
        let transactions = vec![eur_transaction(today, spent_cents)];

        let stats = calculate_burn_rate(&transactions, Decimal::new(limit_cents, 2), today);

        prop_assert_eq!(stats.percent_used, 0);
    }

    /// Pure-function determinism: identical inputs and today yield
    /// identical outputs.
    #[test]
    fn test_engine_is_deterministic(
        amounts in prop::collection::vec(1i64..=500_000, 0..10),
        limit_cents in 1i64..=1_000_000,
        today in any_day_in_august(),
    ) {
        let transactions: Vec<Transaction> = amounts
            .iter()
            .map(|&cents| eur_transaction(today, cents))
            .collect();
        let limit = Decimal::new(limit_cents, 2);
        let rules = vec![BudgetRule {
            category: "Other".to_string(),
            monthly_limit: limit,
            alert_threshold: None,
        }];

        let first = calculate_burn_rate(&transactions, limit, today);
        let second = calculate_burn_rate(&transactions, limit, today);
        prop_assert_eq!(first, second);

        let first = check_category_limits(&transactions, &rules, today);
        let second = check_category_limits(&transactions, &rules, today);
        prop_assert_eq!(first, second);
    }

    /// Every rule produces exactly one row and Exceeded tracks the sign of
    /// remaining.
    #[test]
    fn test_category_rows_mirror_rules(
        amounts in prop::collection::vec(1i64..=200_000, 1..10),
        limit_cents in 1i64..=500_000,
        today in any_day_in_august(),
    ) {
        let transactions: Vec<Transaction> = amounts
            .iter()
            .map(|&cents| eur_transaction(today, cents))
            .collect();
        let rules = vec![
            BudgetRule {
                category: "Other".to_string(),
                monthly_limit: Decimal::new(limit_cents, 2),
                alert_threshold: None,
            },
            BudgetRule {
                category: "Rent".to_string(),
                monthly_limit: Decimal::new(limit_cents, 2),
                alert_threshold: None,
            },
        ];

        let statuses = check_category_limits(&transactions, &rules, today);

        prop_assert_eq!(statuses.len(), rules.len());
        for status in &statuses {
            let exceeded = status.remaining < Decimal::ZERO;
            prop_assert_eq!(status.status == LimitStatus::Exceeded, exceeded);
            prop_assert_eq!(status.remaining, status.monthly_limit - status.spent);
        }
        // All spend landed in "Other"; "Rent" saw none.
        prop_assert_eq!(statuses[1].spent, Decimal::ZERO);
    }
}
