//! Budget rule records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-category monthly spending ceiling.
///
/// Rules are curated outside the system and are read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRule {
    /// Category key, matched against `Transaction::category`.
    pub category: String,
    /// Monthly ceiling in reference-currency units.
    pub monthly_limit: Decimal,
    /// Advisory warning level. Carried through but not evaluated yet.
    pub alert_threshold: Option<Decimal>,
}
