//! In-process table store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use spendtrack_core::ledger::{BudgetRule, NewTransaction, Transaction};

use crate::rows::{encode_transaction_row, parse_rule_row, parse_transaction_row};
use crate::{LedgerStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    transactions: Vec<Vec<String>>,
    rules: Vec<Vec<String>>,
}

/// In-process `LedgerStore` over raw string rows.
///
/// Rows are kept in the same shape a remote table store would hold them, so
/// every read exercises the row codec. Appends push encoded rows under a
/// write lock, which gives read-after-write within the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with raw table contents, for tests and seeding.
    #[must_use]
    pub fn with_tables(transactions: Vec<Vec<String>>, rules: Vec<Vec<String>>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                transactions,
                rules,
            }),
        }
    }

    /// Creates a store seeded with the stock budget rules.
    #[must_use]
    pub fn with_default_rules() -> Self {
        let rules = [
            ["Rent", "400", "380"],
            ["Food", "300", "270"],
            ["Travel", "200", "180"],
            ["Fun", "100", "90"],
            ["Other", "50", "45"],
        ]
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
        Self::with_tables(Vec::new(), rules)
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn get_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .transactions
            .iter()
            .map(|row| parse_transaction_row(row))
            .collect())
    }

    async fn get_budget_rules(&self) -> Result<Vec<BudgetRule>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .rules
            .iter()
            .filter_map(|row| parse_rule_row(row))
            .collect())
    }

    async fn add_transaction(&self, new: NewTransaction) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.transactions.push(encode_transaction_row(&new));
        Ok(())
    }
}
