//! Budget rule routes.
//!
//! Rules are curated outside the system; this surface is read-only.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tracing::error;

use crate::{
    AppState,
    routes::{error_response, format_money},
};
use spendtrack_core::ledger::BudgetRule;
use spendtrack_shared::AppError;

/// Creates the budget rule routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rules", get(list_rules))
}

/// Response for one budget rule.
#[derive(Debug, Serialize)]
pub struct RuleResponse {
    /// Category key.
    pub category: String,
    /// Monthly ceiling in reference-currency units.
    pub monthly_limit: String,
    /// Advisory warning level, when set.
    pub alert_threshold: Option<String>,
}

impl From<BudgetRule> for RuleResponse {
    fn from(rule: BudgetRule) -> Self {
        Self {
            category: rule.category,
            monthly_limit: format_money(rule.monthly_limit),
            alert_threshold: rule.alert_threshold.map(format_money),
        }
    }
}

/// GET /rules
#[axum::debug_handler]
async fn list_rules(State(state): State<AppState>) -> impl IntoResponse {
    let rules = match state.store.get_budget_rules().await {
        Ok(rules) => rules,
        Err(e) => {
            error!(error = %e, "Failed to read budget rules");
            return error_response(&AppError::LedgerSource(e.to_string()));
        }
    };

    let items: Vec<RuleResponse> = rules.into_iter().map(RuleResponse::from).collect();

    (StatusCode::OK, Json(items)).into_response()
}
