//! Derived views over the ledger.

pub mod trend;

pub use trend::{DailyTotal, daily_totals};
