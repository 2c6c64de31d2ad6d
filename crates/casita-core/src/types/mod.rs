//! Domain types for rental investment analysis.
//!
//! - [`AnalysisRequest`]: validated financing parameters for one analysis
//! - [`ComparableStatistics`] / [`PercentileStatistics`]: aggregated market
//!   data supplied by the data-source collaborator
//! - [`ExpenseBreakdown`]: the itemized annual expense projection
//! - [`AnalysisReport`] / [`AnalysisOutcome`]: the assembled response

mod expense;
mod market;
mod report;
mod request;

pub use expense::{ExpenseBreakdown, ExpenseCategory, ExpenseItem};
pub use market::{
    ComparableStatistics, ConfigurationInfo, MarketInfo, NeighborhoodInfo, PercentileStatistics,
    SupportedCombination,
};
pub use report::{
    AnalysisOutcome, AnalysisReport, Confidence, DataSourceInfo, InsightsSection, MetadataSection,
    MetricsSection, OccupancyInfo, ProfileSection, ProfileSource, RangeInfo, RateInfo,
    Recommendation, RevenueSection, SeasonalRange, SummarySection,
};
pub use request::AnalysisRequest;
