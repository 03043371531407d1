//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::AppState;
use spendtrack_shared::AppError;

pub mod dashboard;
pub mod health;
pub mod rules;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(transactions::routes())
        .merge(rules::routes())
}

/// Renders an `AppError` as the standard error body.
pub(crate) fn error_response(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code().to_lowercase(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}

/// Formats a Decimal as a string with 2 decimal places.
pub(crate) fn format_money(amount: rust_decimal::Decimal) -> String {
    format!("{amount:.2}")
}
