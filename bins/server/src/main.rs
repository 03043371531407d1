//! Spendtrack API Server
//!
//! Main entry point for the Spendtrack backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendtrack_api::{AppState, create_router};
use spendtrack_core::currency::RateTable;
use spendtrack_shared::AppConfig;
use spendtrack_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // The in-process ledger source ships with the stock rule table.
    let store = Arc::new(MemoryStore::with_default_rules());
    info!("Ledger source ready");

    // Create application state
    let state = AppState {
        store,
        rates: Arc::new(RateTable::default()),
        budget: config.budget.clone(),
    };
    info!(monthly_limit = %state.budget.monthly_limit, "Budget configured");

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
