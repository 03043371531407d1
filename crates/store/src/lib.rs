//! Ledger Source boundary for Spendtrack.
//!
//! This crate provides:
//! - The `LedgerStore` trait the engine's callers read and append through
//! - The persisted row layout and its tolerant codec
//! - An in-process table store backing the server and the tests
//!
//! Remote table stores (and their connections, retries, and caching) live
//! behind the same trait and are out of scope here.

pub mod error;
pub mod memory;
pub mod rows;

pub use error::StoreError;
pub use memory::MemoryStore;

use async_trait::async_trait;
use spendtrack_core::ledger::{BudgetRule, NewTransaction, Transaction};

/// Append-only tabular store of transactions and budget rules.
///
/// Transactions are independent rows with no cross-row invariant; rules are
/// read-only from this side. A read issued after a successful append must
/// reflect the appended row.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Reads every transaction row.
    async fn get_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Reads every budget rule row.
    async fn get_budget_rules(&self) -> Result<Vec<BudgetRule>, StoreError>;

    /// Appends one transaction row.
    async fn add_transaction(&self, new: NewTransaction) -> Result<(), StoreError>;
}
