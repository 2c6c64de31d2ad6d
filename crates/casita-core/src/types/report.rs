//! The assembled investment analysis report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::ExpenseBreakdown;
use super::market::SupportedCombination;

/// Qualitative recommendation tier, derived from cash-on-cash return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Cash-on-cash return clears the buy threshold.
    Buy,
    /// Worth a closer look; clears the consider threshold.
    Consider,
    /// Below the consider threshold.
    Caution,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::Buy => "buy",
            Recommendation::Consider => "consider",
            Recommendation::Caution => "caution",
        };
        f.write_str(s)
    }
}

/// Confidence tier, derived from the size of the comparable sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Large comparable sample.
    High,
    /// Moderate comparable sample.
    Medium,
    /// Thin comparable sample.
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        f.write_str(s)
    }
}

/// Where the narrative profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    /// Exact bed/bath combination profile.
    Combo,
    /// Neighborhood-level profile used because no combo profile exists.
    NeighborhoodFallback,
}

/// Headline, recommendation, and confidence for the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySection {
    /// One-sentence summary embedding the cash-on-cash percentage.
    pub headline: String,
    /// Recommendation tier.
    pub recommendation: Recommendation,
    /// Confidence tier.
    pub confidence: Confidence,
}

/// Narrative profile of the neighborhood or combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSection {
    /// Profile text.
    pub text: String,
    /// Which profile level supplied the text.
    pub source: ProfileSource,
    /// When the profile was generated.
    pub generated_at: DateTime<Utc>,
}

/// Qualitative insights for the combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsSection {
    /// What drives successful listings here.
    pub success_factors: Vec<String>,
    /// Risks for this combination.
    pub risk_factors: Vec<String>,
    /// Amenities that command a premium.
    pub premium_amenities: Vec<String>,
    /// Which profile level supplied the insights.
    pub source: ProfileSource,
}

/// Derived ROI metrics.
///
/// Ratios are dimensionless fractions rounded to 4 decimal places; currency
/// amounts are USD rounded to 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSection {
    /// Annual cash flow over cash invested.
    pub cash_on_cash_return: Decimal,
    /// Net operating income over purchase price.
    pub cap_rate: Decimal,
    /// Gross revenue minus operating expenses (debt service excluded), USD.
    pub net_operating_income: Decimal,
    /// Gross revenue minus all expenses including debt service, USD.
    pub annual_cash_flow: Decimal,
    /// Occupancy fraction at which revenue covers total annual expenses.
    pub break_even_occupancy: Decimal,
    /// Gross revenue over purchase price.
    pub gross_yield: Decimal,
}

/// Nightly-rate percentile boundaries for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeInfo {
    /// 25th percentile nightly price, USD.
    pub p25: Decimal,
    /// 50th percentile nightly price, USD.
    pub p50: Decimal,
    /// 75th percentile nightly price, USD.
    pub p75: Decimal,
}

/// Average nightly rate with percentile context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInfo {
    /// Average nightly price across comparables, USD.
    pub value: Decimal,
    /// Percentile bucket the average falls into (25, 50, 75, or 90).
    pub percentile: u8,
    /// Percentile boundaries used for the bucket.
    pub range: RangeInfo,
}

/// Fixed seasonal occupancy reference band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRange {
    /// Low-season occupancy fraction.
    pub low: Decimal,
    /// High-season occupancy fraction.
    pub high: Decimal,
}

/// Occupancy fraction with seasonal context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyInfo {
    /// Trailing-average occupancy as a fraction of the year.
    pub value: Decimal,
    /// Configured seasonal band, surfaced as fixed reference values.
    pub seasonal_range: SeasonalRange,
}

/// Revenue estimates and market context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSection {
    /// Nightly rate with percentile context.
    pub nightly_rate: RateInfo,
    /// Occupancy with seasonal context.
    pub occupancy_rate: OccupancyInfo,
    /// Average trailing-365-day gross revenue across comparables, USD.
    pub gross_annual_revenue: Decimal,
    /// Number of comparable listings behind the estimates.
    pub comparables_count: u32,
}

/// Citation for one external data source used in the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInfo {
    /// Source name.
    pub name: String,
    /// Snapshot or publication date.
    pub date: String,
    /// What the source contributed.
    pub description: String,
}

/// Analysis metadata: sources and stated assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSection {
    /// When the analysis ran.
    pub analysis_date: DateTime<Utc>,
    /// External data sources cited.
    pub data_sources: Vec<DataSourceInfo>,
    /// Human-readable modeling assumptions.
    pub assumptions: Vec<String>,
}

/// The complete successful analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Headline and recommendation.
    pub summary: SummarySection,
    /// Narrative profile.
    pub profile: ProfileSection,
    /// Qualitative insights.
    pub insights: InsightsSection,
    /// Derived ROI metrics.
    pub metrics: MetricsSection,
    /// Revenue estimates and context.
    pub revenue: RevenueSection,
    /// Itemized expense projection.
    pub expenses: ExpenseBreakdown,
    /// Sources and assumptions.
    pub metadata: MetadataSection,
}

/// Outcome of one analysis: a full report, or a defined "no data" branch.
///
/// "No data for this combination" is not an error — upstream source failures
/// are; see [`SourceError`](crate::error::SourceError).
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Comparable data existed; the full report was produced.
    Report(Box<AnalysisReport>),
    /// No comparable data for the requested combination.
    NoData {
        /// Message naming the requested combination.
        message: String,
        /// Combinations the service does have data for.
        supported_combinations: Vec<SupportedCombination>,
    },
}

impl AnalysisOutcome {
    /// Returns the report when the analysis succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::NoData { .. } => None,
        }
    }
}
