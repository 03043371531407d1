//! Transaction records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single spending event read back from the ledger source.
///
/// `amount_reference` is the EUR value fixed when the record was created.
/// It is persisted alongside `amount` and never re-derived afterwards, so
/// historical records are immune to rate-table changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the spend. `None` marks a row whose persisted date
    /// could not be parsed; such a row belongs to no month.
    pub date: Option<NaiveDate>,
    /// Amount in `currency` units.
    pub amount: Decimal,
    /// Currency code as persisted. Unknown codes are legal.
    pub currency: String,
    /// Spending bucket. Free-form; not validated against the rule set.
    pub category: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Amount converted to the reference currency at record-creation time.
    pub amount_reference: Decimal,
}

impl Transaction {
    /// Returns true if the row carries a parseable date.
    #[must_use]
    pub const fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// Input for appending a new transaction to the ledger source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Calendar date of the spend.
    pub date: NaiveDate,
    /// Amount in `currency` units.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Spending bucket.
    pub category: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Amount converted to the reference currency, fixed at entry time.
    pub amount_reference: Decimal,
}

impl From<NewTransaction> for Transaction {
    fn from(new: NewTransaction) -> Self {
        Self {
            date: Some(new.date),
            amount: new.amount,
            currency: new.currency,
            category: new.category,
            description: new.description,
            amount_reference: new.amount_reference,
        }
    }
}
