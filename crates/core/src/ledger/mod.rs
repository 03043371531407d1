//! Transaction and budget-rule records.

pub mod rule;
pub mod transaction;

pub use rule::BudgetRule;
pub use transaction::{NewTransaction, Transaction};
