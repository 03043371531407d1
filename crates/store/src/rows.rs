//! Persisted row layout and codec.
//!
//! Column order is the append contract with the external table store:
//! `Transactions` rows are `[Date, Amount, Currency, Category, Description,
//! Amount_EUR]` and `Budget_Rules` rows are `[Category, Monthly_Limit,
//! Alert_Threshold]`.
//!
//! Ingestion coerces instead of rejecting: an unparseable date becomes
//! `None` (the row belongs to no month), unparseable amounts become zero,
//! and missing trailing cells read as empty. Rule rows are only dropped
//! when the category cell is blank.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use spendtrack_core::ledger::{BudgetRule, NewTransaction, Transaction};

/// Header row of the `Transactions` table.
pub const TRANSACTION_HEADERS: [&str; 6] = [
    "Date",
    "Amount",
    "Currency",
    "Category",
    "Description",
    "Amount_EUR",
];

/// Header row of the `Budget_Rules` table.
pub const RULE_HEADERS: [&str; 3] = ["Category", "Monthly_Limit", "Alert_Threshold"];

/// Date format used in persisted rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str).trim()
}

fn parse_amount(raw: &str) -> Decimal {
    raw.parse().unwrap_or_default()
}

/// Decodes one `Transactions` row. Never fails; malformed cells coerce.
#[must_use]
pub fn parse_transaction_row(row: &[String]) -> Transaction {
    let description = cell(row, 4);
    Transaction {
        date: NaiveDate::parse_from_str(cell(row, 0), DATE_FORMAT).ok(),
        amount: parse_amount(cell(row, 1)),
        currency: cell(row, 2).to_string(),
        category: cell(row, 3).to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        amount_reference: parse_amount(cell(row, 5)),
    }
}

/// Encodes a new transaction into the persisted column order.
#[must_use]
pub fn encode_transaction_row(new: &NewTransaction) -> Vec<String> {
    vec![
        new.date.format(DATE_FORMAT).to_string(),
        new.amount.to_string(),
        new.currency.clone(),
        new.category.clone(),
        new.description.clone().unwrap_or_default(),
        new.amount_reference.to_string(),
    ]
}

/// Decodes one `Budget_Rules` row. Rows with a blank category are dropped.
#[must_use]
pub fn parse_rule_row(row: &[String]) -> Option<BudgetRule> {
    let category = cell(row, 0);
    if category.is_empty() {
        return None;
    }
    Some(BudgetRule {
        category: category.to_string(),
        monthly_limit: parse_amount(cell(row, 1)),
        alert_threshold: cell(row, 2).parse().ok(),
    })
}
