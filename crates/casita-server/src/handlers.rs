//! Request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use casita_analysis::{roi, AnalysisError, AnalysisService, RentalInputs};
use casita_core::error::SourceError;
use casita_core::traits::MarketDataSource;
use casita_core::types::{AnalysisOutcome, AnalysisRequest};

/// Application state.
pub struct AppState {
    /// The analysis orchestrator.
    pub service: AnalysisService,
    /// The market data source, shared with the service.
    pub source: Arc<dyn MarketDataSource>,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Analyze a short-term-rental investment opportunity.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalysisRequest>,
) -> (StatusCode, Json<Value>) {
    match state.service.analyze(&request).await {
        Ok(AnalysisOutcome::Report(report)) => {
            info!(
                market = %request.market,
                neighborhood = %request.neighborhood,
                bedrooms = request.bedrooms,
                cash_on_cash = %report.metrics.cash_on_cash_return,
                "analysis completed"
            );
            (StatusCode::OK, Json(serde_json::to_value(&report).unwrap()))
        }
        Ok(AnalysisOutcome::NoData {
            message,
            supported_combinations,
        }) => {
            warn!(
                market = %request.market,
                neighborhood = %request.neighborhood,
                "no data for requested combination"
            );
            let combinations: Vec<String> = supported_combinations
                .iter()
                .map(ToString::to_string)
                .collect();
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": message,
                    "supportedCombinations": combinations,
                })),
            )
        }
        Err(AnalysisError::Validation(errors)) => {
            warn!(%errors, "analyze request failed validation");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "violations": errors,
                })),
            )
        }
        Err(AnalysisError::Source(e)) => {
            warn!(error = %e, "market data source failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": format!("market data unavailable: {}", e)
                })),
            )
        }
    }
}

/// Calculate basic rental ROI metrics.
pub async fn calculate_roi(Json(inputs): Json<RentalInputs>) -> (StatusCode, Json<Value>) {
    match roi::calculate(&inputs) {
        Ok(result) => {
            info!(
                cap_rate_percent = %result.cap_rate_percent,
                monthly_profit = %result.monthly_profit,
                "ROI calculated"
            );
            (StatusCode::OK, Json(serde_json::to_value(&result).unwrap()))
        }
        Err(errors) => {
            warn!(%errors, "invalid input for ROI calculation");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "violations": errors,
                })),
            )
        }
    }
}

/// Get available markets.
pub async fn markets(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.source.markets().await {
        Ok(markets) => (StatusCode::OK, Json(json!({ "markets": markets }))),
        Err(e) => source_failure(&e),
    }
}

/// Get neighborhoods for a market.
pub async fn neighborhoods(
    State(state): State<Arc<AppState>>,
    Path(market): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.source.neighborhoods(&market).await {
        Ok(neighborhoods) => (
            StatusCode::OK,
            Json(json!({
                "market": market,
                "neighborhoods": neighborhoods,
            })),
        ),
        Err(e) => source_failure(&e),
    }
}

/// Get available bed/bath configurations for a neighborhood.
pub async fn configurations(
    State(state): State<Arc<AppState>>,
    Path((market, neighborhood)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    match state.source.configurations(&market, &neighborhood).await {
        Ok(configurations) => (
            StatusCode::OK,
            Json(json!({
                "market": market,
                "neighborhood": neighborhood,
                "configurations": configurations,
            })),
        ),
        Err(e) => source_failure(&e),
    }
}

fn source_failure(e: &SourceError) -> (StatusCode, Json<Value>) {
    warn!(error = %e, "market data source failure");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({
            "error": format!("market data unavailable: {}", e)
        })),
    )
}
