//! Dashboard routes.
//!
//! The handlers read the wall clock once per request and hand the engine an
//! explicit "today", keeping the calculations themselves deterministic.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    AppState,
    routes::{error_response, format_money},
};
use spendtrack_core::budget::{BurnStatus, LimitStatus, calculate_burn_rate, check_category_limits};
use spendtrack_core::reports::daily_totals;
use spendtrack_shared::AppError;
use spendtrack_store::rows::DATE_FORMAT;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/metrics", get(get_dashboard_metrics))
        .route("/dashboard/categories", get(get_category_statuses))
        .route("/dashboard/trend", get(get_spending_trend))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for dashboard metrics.
#[derive(Debug, Deserialize)]
pub struct DashboardMetricsQuery {
    /// Overrides the configured monthly limit for this call.
    pub limit: Option<Decimal>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for dashboard metrics.
#[derive(Debug, Serialize)]
pub struct DashboardMetricsResponse {
    /// Reference-currency spend this month.
    pub total_spent: String,
    /// Budget remaining. Negative once the budget is exceeded.
    pub remaining: String,
    /// Days remaining in the month after today.
    pub days_left: u32,
    /// Safe daily spend for the rest of the month.
    pub daily_limit: String,
    /// Display percentage, capped at 100.
    pub percent_used: u32,
    /// Budget health.
    pub status: BurnStatus,
}

/// Response row for one category status.
#[derive(Debug, Serialize)]
pub struct CategoryStatusResponse {
    /// Category key.
    pub category: String,
    /// Reference-currency spend this month.
    pub spent: String,
    /// Monthly ceiling from the rule.
    pub monthly_limit: String,
    /// Ceiling minus spend.
    pub remaining: String,
    /// Limit classification.
    pub status: LimitStatus,
}

/// Response row for one day of the spending trend.
#[derive(Debug, Serialize)]
pub struct TrendPointResponse {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Reference-currency spend on that date.
    pub total: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /dashboard/metrics
#[axum::debug_handler]
async fn get_dashboard_metrics(
    State(state): State<AppState>,
    Query(query): Query<DashboardMetricsQuery>,
) -> impl IntoResponse {
    let transactions = match state.store.get_transactions().await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!(error = %e, "Failed to read transactions");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };

    let limit = query.limit.unwrap_or(state.budget.monthly_limit);
    let today = chrono::Utc::now().date_naive();
    let stats = calculate_burn_rate(&transactions, limit, today);

    let response = DashboardMetricsResponse {
        total_spent: format_money(stats.total_spent),
        remaining: format_money(stats.remaining),
        days_left: stats.days_left,
        daily_limit: format_money(stats.daily_limit),
        percent_used: stats.percent_used,
        status: stats.status,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /dashboard/categories
#[axum::debug_handler]
async fn get_category_statuses(State(state): State<AppState>) -> impl IntoResponse {
    let transactions = match state.store.get_transactions().await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!(error = %e, "Failed to read transactions");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };
    let rules = match state.store.get_budget_rules().await {
        Ok(rules) => rules,
        Err(e) => {
            error!(error = %e, "Failed to read budget rules");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };

    let today = chrono::Utc::now().date_naive();
    let statuses: Vec<CategoryStatusResponse> =
        check_category_limits(&transactions, &rules, today)
            .into_iter()
            .map(|status| CategoryStatusResponse {
                category: status.category,
                spent: format_money(status.spent),
                monthly_limit: format_money(status.monthly_limit),
                remaining: format_money(status.remaining),
                status: status.status,
            })
            .collect();

    (StatusCode::OK, Json(statuses)).into_response()
}

/// GET /dashboard/trend
#[axum::debug_handler]
async fn get_spending_trend(State(state): State<AppState>) -> impl IntoResponse {
    let transactions = match state.store.get_transactions().await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!(error = %e, "Failed to read transactions");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };

    let trend: Vec<TrendPointResponse> = daily_totals(&transactions)
        .into_iter()
        .map(|point| TrendPointResponse {
            date: point.date.format(DATE_FORMAT).to_string(),
            total: format_money(point.total),
        })
        .collect();

    (StatusCode::OK, Json(trend)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{AppState, create_router};
    use spendtrack_core::currency::RateTable;
    use spendtrack_core::ledger::{BudgetRule, NewTransaction, Transaction};
    use spendtrack_shared::BudgetConfig;
    use spendtrack_store::{LedgerStore, MemoryStore, StoreError};

    struct FailingStore;

    #[async_trait]
    impl LedgerStore for FailingStore {
        async fn get_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn get_budget_rules(&self) -> Result<Vec<BudgetRule>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn add_transaction(&self, _new: NewTransaction) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    fn state_with(store: Arc<dyn LedgerStore>) -> AppState {
        AppState {
            store,
            rates: Arc::new(RateTable::default()),
            budget: BudgetConfig::default(),
        }
    }

    async fn seed_eur(store: &MemoryStore, amount: rust_decimal::Decimal, category: &str) {
        store
            .add_transaction(NewTransaction {
                date: chrono::Utc::now().date_naive(),
                amount,
                currency: "EUR".to_string(),
                category: category.to_string(),
                description: None,
                amount_reference: amount,
            })
            .await
            .unwrap();
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let app = create_router(state);
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_metrics_half_used_budget() {
        let store = Arc::new(MemoryStore::new());
        seed_eur(&store, dec!(500), "Food").await;

        let (status, body) = get_json(state_with(store), "/api/v1/dashboard/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_spent"], "500.00");
        assert_eq!(body["remaining"], "500.00");
        assert_eq!(body["percent_used"], 50);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_metrics_limit_override() {
        let store = Arc::new(MemoryStore::new());
        seed_eur(&store, dec!(500), "Food").await;

        let (status, body) =
            get_json(state_with(store), "/api/v1/dashboard/metrics?limit=400").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["remaining"], "-100.00");
        assert_eq!(body["status"], "CRITICAL");
        assert_eq!(body["percent_used"], 100);
    }

    #[tokio::test]
    async fn test_categories_join_rules() {
        let store = Arc::new(MemoryStore::with_default_rules());
        seed_eur(&store, dec!(100), "Food").await;
        seed_eur(&store, dec!(250), "Food").await;

        let (status, body) = get_json(state_with(store), "/api/v1/dashboard/categories").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        let food = rows
            .iter()
            .find(|row| row["category"] == "Food")
            .unwrap();
        assert_eq!(food["spent"], "350.00");
        assert_eq!(food["remaining"], "-50.00");
        assert_eq!(food["status"], "Exceeded");
        let rent = rows
            .iter()
            .find(|row| row["category"] == "Rent")
            .unwrap();
        assert_eq!(rent["spent"], "0.00");
        assert_eq!(rent["status"], "OK");
    }

    #[tokio::test]
    async fn test_trend_accumulates_per_day() {
        let store = Arc::new(MemoryStore::new());
        seed_eur(&store, dec!(10), "Food").await;
        seed_eur(&store, dec!(5.50), "Fun").await;

        let (status, body) = get_json(state_with(store), "/api/v1/dashboard/trend").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["total"], "15.50");
    }

    #[tokio::test]
    async fn test_metrics_store_failure_maps_to_bad_gateway() {
        let (status, body) =
            get_json(state_with(Arc::new(FailingStore)), "/api/v1/dashboard/metrics").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "ledger_source_error");
    }
}
