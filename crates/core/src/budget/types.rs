//! Budget calculation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall budget health for the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BurnStatus {
    /// Spending is on track.
    Ok,
    /// Less than 10% of the budget remains.
    Warning,
    /// The budget has been exceeded.
    Critical,
}

/// Burn-rate snapshot for the current month.
///
/// Recomputed on every call; carries no persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRateStats {
    /// Sum of reference-currency spend this month.
    pub total_spent: Decimal,
    /// Budget minus spend. Goes negative when the budget is exceeded.
    pub remaining: Decimal,
    /// Days remaining in the month after today.
    pub days_left: u32,
    /// Safe daily spend for the rest of the month. Zero when no days remain.
    pub daily_limit: Decimal,
    /// Spend as a share of the budget, rounded, capped at 100 for display.
    /// The cap applies only here; `remaining` is computed independently.
    pub percent_used: u32,
    /// Health classification.
    pub status: BurnStatus,
}

/// Per-category limit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStatus {
    /// Spend is within the category ceiling.
    #[serde(rename = "OK")]
    Ok,
    /// Spend has exceeded the category ceiling.
    Exceeded,
}

/// Spend vs. ceiling for one budget rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatus {
    /// Category key from the rule.
    pub category: String,
    /// Reference-currency spend this month. Zero when nothing matched.
    pub spent: Decimal,
    /// Monthly ceiling from the rule.
    pub monthly_limit: Decimal,
    /// Ceiling minus spend. Goes negative when exceeded.
    pub remaining: Decimal,
    /// Limit classification.
    pub status: LimitStatus,
}
