//! The analysis orchestrator.
//!
//! Composes mortgage amortization, the expense projection, the metrics
//! engine, the revenue estimator, and the recommendation classifier into one
//! response, given a request and a [`MarketDataSource`]. This is the only
//! component that talks to the data-access collaborator.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use casita_core::formatting::{group_thousands, percent};
use casita_core::traits::MarketDataSource;
use casita_core::types::{
    AnalysisOutcome, AnalysisReport, AnalysisRequest, ComparableStatistics, DataSourceInfo,
    InsightsSection, MetadataSection, PercentileStatistics, ProfileSection, ProfileSource,
    SummarySection,
};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::{expenses, metrics, recommendation, revenue};

/// Orchestrates property investment analysis over a market data source.
pub struct AnalysisService {
    source: Arc<dyn MarketDataSource>,
    config: AnalysisConfig,
}

impl AnalysisService {
    /// Creates a service over `source` with the given assumptions.
    pub fn new(source: Arc<dyn MarketDataSource>, config: AnalysisConfig) -> Self {
        Self { source, config }
    }

    /// The configured rate and fee assumptions.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes a property investment opportunity.
    ///
    /// Validates the request, looks up comparable statistics and percentiles
    /// (independent lookups, issued concurrently), and assembles the report.
    /// An absent combination is the [`AnalysisOutcome::NoData`] branch,
    /// carrying the supported alternatives; source failures are errors.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        request.validate()?;

        let (stats, percentiles) = tokio::join!(
            self.source.comparable_statistics(
                &request.market,
                &request.neighborhood,
                request.bedrooms,
                request.bathrooms_or_zero(),
            ),
            self.source
                .percentiles(&request.market, &request.neighborhood, request.bedrooms),
        );

        let Some(stats) = stats? else {
            debug!(
                market = %request.market,
                neighborhood = %request.neighborhood,
                "no comparable data for requested combination"
            );
            let supported = self.source.supported_combinations().await?;
            return Ok(AnalysisOutcome::NoData {
                message: format!(
                    "No data available for {} {}BR/{}BA in {}",
                    request.neighborhood,
                    request.bedrooms,
                    request.bathrooms_or_zero().normalize(),
                    request.market
                ),
                supported_combinations: supported,
            });
        };
        let percentiles = percentiles?;

        let interest_rate = request
            .interest_rate
            .unwrap_or(self.config.default_interest_rate);
        let gross_revenue = revenue::select_gross_revenue(&stats, percentiles.as_ref());

        let expenses = expenses::project(
            request,
            gross_revenue,
            stats.avg_price,
            interest_rate,
            &self.config,
        );
        let metrics = metrics::derive(request, gross_revenue, &expenses, stats.avg_price);

        let summary = SummarySection {
            headline: recommendation::headline(metrics.cash_on_cash_return, &self.config),
            recommendation: recommendation::recommendation(
                metrics.cash_on_cash_return,
                &self.config,
            ),
            confidence: recommendation::confidence(stats.listing_count, &self.config),
        };

        let profile_source = if stats.combo_profile.is_some() {
            ProfileSource::Combo
        } else {
            ProfileSource::NeighborhoodFallback
        };
        let profile = ProfileSection {
            text: stats
                .combo_profile
                .clone()
                .or_else(|| stats.neighborhood_profile.clone())
                .unwrap_or_else(|| "No profile available for this combination.".to_string()),
            source: profile_source,
            generated_at: stats
                .computed_at
                .or(stats.neighborhood_generated_at)
                .unwrap_or_else(Utc::now),
        };

        let revenue_section = revenue::build_section(&stats, percentiles.as_ref(), &self.config);
        let metadata = self.build_metadata(request, percentiles.as_ref(), &stats, interest_rate);

        Ok(AnalysisOutcome::Report(Box::new(AnalysisReport {
            summary,
            profile,
            insights: InsightsSection {
                success_factors: stats.success_factors,
                risk_factors: stats.risk_factors,
                premium_amenities: stats.premium_amenities,
                source: profile_source,
            },
            metrics,
            revenue: revenue_section,
            expenses,
            metadata,
        })))
    }

    fn build_metadata(
        &self,
        request: &AnalysisRequest,
        percentiles: Option<&PercentileStatistics>,
        stats: &ComparableStatistics,
        interest_rate: Decimal,
    ) -> MetadataSection {
        let comparables = percentiles.map_or(stats.listing_count, |p| p.comparables_count);

        MetadataSection {
            analysis_date: Utc::now(),
            data_sources: vec![
                DataSourceInfo {
                    name: "Inside Airbnb".to_string(),
                    date: "2024-12-15".to_string(),
                    description: format!(
                        "{} comparable listings, {} reviews analyzed",
                        comparables, stats.review_count
                    ),
                },
                DataSourceInfo {
                    name: "Freddie Mac PMMS".to_string(),
                    date: "2025-01-09".to_string(),
                    description: format!("30-year fixed rate: {}%", interest_rate.normalize()),
                },
            ],
            assumptions: vec![
                format!(
                    "{}% down payment (${})",
                    request.down_payment_percent.normalize(),
                    group_thousands(request.down_payment())
                ),
                format!("{}-year fixed mortgage", request.loan_term_years),
                if request.self_managed {
                    "Self-managed property".to_string()
                } else {
                    format!(
                        "Professional management ({}%)",
                        percent(self.config.management_rate)
                    )
                },
                "Occupancy based on 12-month trailing average".to_string(),
            ],
        }
    }
}
