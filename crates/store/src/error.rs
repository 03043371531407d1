//! Store error types.

use thiserror::Error;

/// Error types for ledger-source operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing table store could not be reached.
    #[error("Ledger source unavailable: {0}")]
    Unavailable(String),

    /// The backing table store returned rows in an unusable shape.
    #[error("Malformed ledger table: {0}")]
    Schema(String),
}
