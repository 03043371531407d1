//! Transaction routes.
//!
//! Entry is where normalization happens: the reference amount is computed
//! exactly once from the rate table, then persisted alongside the original
//! amount. Reads never re-derive it.

use std::cmp::Ordering;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    AppState,
    routes::{error_response, format_money},
};
use spendtrack_core::currency::{Currency, normalize};
use spendtrack_core::ledger::{NewTransaction, Transaction};
use spendtrack_shared::AppError;
use spendtrack_store::rows::DATE_FORMAT;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(create_transaction))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Maximum number of items to return (default: 10, max: 50).
    pub limit: Option<usize>,
}

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Amount in `currency` units. Must be positive.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
    /// Spending bucket.
    pub category: String,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Response for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction date, `None` for rows whose persisted date is unreadable.
    pub date: Option<String>,
    /// Amount in the original currency.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// Spending bucket.
    pub category: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Reference-currency amount fixed at entry time.
    pub amount_eur: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            date: transaction
                .date
                .map(|d| d.format(DATE_FORMAT).to_string()),
            amount: format_money(transaction.amount),
            currency: transaction.currency,
            category: transaction.category,
            description: transaction.description,
            amount_eur: format_money(transaction.amount_reference),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /transactions
///
/// Recent activity: dated rows newest first, undated rows last.
#[axum::debug_handler]
async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> impl IntoResponse {
    let mut transactions = match state.store.get_transactions().await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!(error = %e, "Failed to read transactions");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };

    transactions.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    let limit = query.limit.unwrap_or(10).min(50);
    transactions.truncate(limit);

    let items: Vec<TransactionResponse> = transactions
        .into_iter()
        .map(TransactionResponse::from)
        .collect();

    (StatusCode::OK, Json(items)).into_response()
}

/// POST /transactions
#[axum::debug_handler]
async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    if request.amount <= Decimal::ZERO {
        return error_response(&AppError::Validation(
            "amount must be positive".to_string(),
        ));
    }

    let amount_reference = normalize(request.amount, request.currency.code(), &state.rates);
    let new = NewTransaction {
        date: request.date,
        amount: request.amount,
        currency: request.currency.to_string(),
        category: request.category,
        description: request.description,
        amount_reference,
    };

    if let Err(e) = state.store.add_transaction(new.clone()).await {
        error!(error = %e, "Failed to append transaction");
        return error_response(&AppError::LedgerSource(e.to_string()));
    }

    info!(
        amount = %new.amount,
        currency = %new.currency,
        amount_eur = %new.amount_reference,
        "Transaction recorded"
    );

    (
        StatusCode::CREATED,
        Json(TransactionResponse::from(Transaction::from(new))),
    )
        .into_response()
}
