//! HTTP API layer with Axum routes.
//!
//! This crate exposes the budget engine to an external presentation layer:
//! - Dashboard metrics, category statuses, and the spending trend
//! - Transaction listing and entry
//! - Budget rule listing
//!
//! The wall clock is read here, at the boundary; everything below takes an
//! explicit date.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use spendtrack_core::currency::RateTable;
use spendtrack_shared::BudgetConfig;
use spendtrack_store::LedgerStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ledger source holding transactions and budget rules.
    pub store: Arc<dyn LedgerStore>,
    /// Fixed exchange-rate table used to normalize new entries.
    pub rates: Arc<RateTable>,
    /// Budget configuration.
    pub budget: BudgetConfig,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
