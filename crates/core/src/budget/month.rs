//! Calendar-month arithmetic.
//!
//! Both the burn-rate calculator and the category-limit checker filter
//! through these helpers, so "current month" means the same thing on every
//! code path.

use chrono::{Datelike, NaiveDate};

/// Returns true if both dates fall in the same calendar month and year.
#[must_use]
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => {
            u32::try_from((next - first).num_days()).unwrap_or_default()
        }
        _ => 0,
    }
}
