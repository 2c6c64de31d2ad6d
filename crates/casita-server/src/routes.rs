//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use casita_analysis::{AnalysisConfig, AnalysisService};
use casita_core::traits::MarketDataSource;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `source` - The market data source
/// * `config` - Analysis rate/fee assumptions
pub fn create_router(source: Arc<dyn MarketDataSource>, config: AnalysisConfig) -> Router {
    let state = Arc::new(AppState {
        service: AnalysisService::new(source.clone(), config),
        source,
    });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Investment analysis
        .route("/v1/analyze", post(handlers::analyze))
        // Market discovery
        .route("/v1/markets", get(handlers::markets))
        .route("/v1/markets/:market/neighborhoods", get(handlers::neighborhoods))
        .route(
            "/v1/markets/:market/neighborhoods/:neighborhood/configurations",
            get(handlers::configurations),
        )
        // Simple ROI calculator
        .route("/calculator/roi", post(handlers::calculate_roi))
        // State
        .with_state(state)
}
