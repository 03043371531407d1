//! Daily spending trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::round_money;
use crate::ledger::Transaction;

/// Reference-currency spend on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Calendar date.
    pub date: NaiveDate,
    /// Sum of reference-currency spend on that date.
    pub total: Decimal,
}

/// Groups the whole ledger by date, summing reference-currency amounts.
///
/// Covers the full history, not just the current month. Undated rows are
/// skipped. Output is ascending by date.
#[must_use]
pub fn daily_totals(transactions: &[Transaction]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for transaction in transactions {
        if let Some(date) = transaction.date {
            *totals.entry(date).or_insert(Decimal::ZERO) += transaction.amount_reference;
        }
    }

    totals
        .into_iter()
        .map(|(date, total)| DailyTotal {
            date,
            total: round_money(total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction(date: Option<NaiveDate>, amount_eur: Decimal) -> Transaction {
        Transaction {
            date,
            amount: amount_eur,
            currency: "EUR".to_string(),
            category: "Other".to_string(),
            description: None,
            amount_reference: amount_eur,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_groups_by_date_ascending() {
        let transactions = vec![
            transaction(Some(date(2026, 8, 5)), dec!(30)),
            transaction(Some(date(2026, 8, 1)), dec!(10)),
            transaction(Some(date(2026, 8, 5)), dec!(12.50)),
            // A different month still shows up in the trend.
            transaction(Some(date(2026, 7, 20)), dec!(5)),
        ];

        let totals = daily_totals(&transactions);

        assert_eq!(
            totals,
            vec![
                DailyTotal {
                    date: date(2026, 7, 20),
                    total: dec!(5.00)
                },
                DailyTotal {
                    date: date(2026, 8, 1),
                    total: dec!(10.00)
                },
                DailyTotal {
                    date: date(2026, 8, 5),
                    total: dec!(42.50)
                },
            ]
        );
    }

    #[test]
    fn test_undated_rows_are_skipped() {
        let transactions = vec![
            transaction(None, dec!(99)),
            transaction(Some(date(2026, 8, 1)), dec!(10)),
        ];

        let totals = daily_totals(&transactions);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, dec!(10.00));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(daily_totals(&[]).is_empty());
    }
}
