//! Integration tests for the Casita server API endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use casita_analysis::AnalysisConfig;
use casita_core::types::{ComparableStatistics, PercentileStatistics};
use casita_server::routes::create_router;
use casita_server::{InMemoryMarketStore, MarketEntry};

/// Create a router over a store seeded with one North Park combination.
fn create_test_router() -> Router {
    let store = InMemoryMarketStore::new();
    store.upsert(MarketEntry {
        market: "san-diego".to_string(),
        neighborhood: "North Park".to_string(),
        bedrooms: 2,
        bathrooms: dec!(2),
        statistics: ComparableStatistics {
            combo_profile: Some("Walkable craft-beer district popular year-round.".to_string()),
            neighborhood_profile: None,
            success_factors: vec!["Walkability".to_string()],
            risk_factors: vec!["Street parking".to_string()],
            premium_amenities: vec!["Hot tub".to_string()],
            review_count: 412,
            computed_at: None,
            neighborhood_generated_at: None,
            avg_revenue: dec!(65000),
            avg_occupancy: dec!(292),
            avg_price: dec!(250),
            avg_rating: dec!(4.8),
            listing_count: 54,
        },
        percentiles: Some(PercentileStatistics {
            revenue_p25: dec!(42000),
            revenue_p50: dec!(58000),
            revenue_p75: dec!(74000),
            price_p25: dec!(180),
            price_p50: dec!(245),
            price_p75: dec!(320),
            comparables_count: 61,
        }),
    });

    create_router(Arc::new(store), AnalysisConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn analyze_request() -> Value {
    json!({
        "market": "san-diego",
        "neighborhood": "North Park",
        "bedrooms": 2,
        "bathrooms": 2,
        "purchasePrice": 850000
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(create_test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn analyze_returns_full_report() {
    let (status, body) = post_json(create_test_router(), "/v1/analyze", analyze_request()).await;
    assert_eq!(status, StatusCode::OK);

    // Summary
    let recommendation = body["summary"]["recommendation"].as_str().unwrap();
    assert!(["buy", "consider", "caution"].contains(&recommendation));
    assert!(body["summary"]["headline"]
        .as_str()
        .unwrap()
        .contains("investment potential"));

    // Expense breakdown carries the exact category key set
    let breakdown = body["expenses"]["breakdown"].as_object().unwrap();
    for key in [
        "mortgage",
        "propertyTax",
        "insurance",
        "hoa",
        "utilities",
        "cleaning",
        "platformFees",
        "maintenance",
        "occupancyTax",
        "permit",
        "propertyManagement",
    ] {
        assert!(breakdown.contains_key(key), "missing category {key}");
        assert!(breakdown[key]["source"].as_str().is_some());
    }
    assert_eq!(breakdown.len(), 11);

    // Metrics and revenue context
    assert!(body["metrics"]["cashOnCashReturn"].is_number());
    assert!(body["metrics"]["breakEvenOccupancy"].is_number());
    assert_eq!(body["revenue"]["comparablesCount"], 61);
    assert_eq!(body["revenue"]["nightlyRate"]["percentile"], 75);

    // Metadata citations
    let sources = body["metadata"]["dataSources"].as_array().unwrap();
    assert!(sources.iter().any(|s| s["name"] == "Inside Airbnb"));
    assert!(sources.iter().any(|s| s["name"] == "Freddie Mac PMMS"));
}

#[tokio::test]
async fn analyze_unknown_combination_returns_supported_alternatives() {
    let mut request = analyze_request();
    request["bedrooms"] = json!(5);

    let (status, body) = post_json(create_test_router(), "/v1/analyze", request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "No data available for North Park 5BR/2BA in san-diego"
    );

    let combos = body["supportedCombinations"].as_array().unwrap();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0], "North Park (2BR/2BA)");
}

#[tokio::test]
async fn analyze_rejects_invalid_purchase_price() {
    let mut request = analyze_request();
    request["purchasePrice"] = json!(0);

    let (status, body) = post_json(create_test_router(), "/v1/analyze", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations[0]["field"], "purchasePrice");
}

#[tokio::test]
async fn roi_calculates_typical_rental() {
    let (status, body) = post_json(
        create_test_router(),
        "/calculator/roi",
        json!({
            "nightlyRate": 150,
            "nightsBookedPerMonth": 20,
            "cleaningFeePerStay": 80,
            "staysPerMonth": 10,
            "monthlyFixedCosts": 2500,
            "purchasePrice": 400000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monthlyRevenue"].as_f64().unwrap(), 3800.0);
    assert_eq!(body["monthlyProfit"].as_f64().unwrap(), 1300.0);
    assert_eq!(body["annualProfit"].as_f64().unwrap(), 15600.0);
    assert_eq!(body["capRatePercent"].as_f64().unwrap(), 3.9);
}

#[tokio::test]
async fn roi_rejects_negative_inputs() {
    let (status, body) = post_json(
        create_test_router(),
        "/calculator/roi",
        json!({
            "nightlyRate": -150,
            "nightsBookedPerMonth": 20,
            "cleaningFeePerStay": 80,
            "staysPerMonth": 10,
            "monthlyFixedCosts": 2500,
            "purchasePrice": 400000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations[0]["field"], "nightlyRate");
}

#[tokio::test]
async fn markets_lists_seeded_market() {
    let (status, body) = get_json(create_test_router(), "/v1/markets").await;
    assert_eq!(status, StatusCode::OK);

    let markets = body["markets"].as_array().unwrap();
    assert_eq!(markets.len(), 1);
    assert_eq!(markets[0]["id"], "san-diego");
    assert_eq!(markets[0]["name"], "San Diego");
    assert_eq!(markets[0]["listingCount"], 54);
}

#[tokio::test]
async fn neighborhoods_and_configurations_drill_down() {
    let (status, body) = get_json(
        create_test_router(),
        "/v1/markets/san-diego/neighborhoods",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let neighborhoods = body["neighborhoods"].as_array().unwrap();
    assert_eq!(neighborhoods[0]["name"], "North Park");
    assert_eq!(neighborhoods[0]["listingCount"], 54);

    let (status, body) = get_json(
        create_test_router(),
        "/v1/markets/san-diego/neighborhoods/North%20Park/configurations",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let configurations = body["configurations"].as_array().unwrap();
    assert_eq!(configurations.len(), 1);
    assert_eq!(configurations[0]["bedrooms"], 2);
    assert_eq!(configurations[0]["hasInsights"], true);
}
