//! Data-source traits.
//!
//! [`MarketDataSource`] is the seam between the analysis engine and whatever
//! supplies comparable statistics — a database, a file snapshot, or an
//! in-memory store in tests. Implementations own retry and caching policy;
//! the engine performs one lookup per request and surfaces failures as-is.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::SourceError;
use crate::types::{
    ComparableStatistics, ConfigurationInfo, MarketInfo, NeighborhoodInfo, PercentileStatistics,
    SupportedCombination,
};

/// Supplies aggregated comparable-listing data for analysis.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Aggregated statistics for one market/neighborhood/bed/bath
    /// combination, or `None` when the combination has no data.
    async fn comparable_statistics(
        &self,
        market: &str,
        neighborhood: &str,
        bedrooms: u8,
        bathrooms: Decimal,
    ) -> Result<Option<ComparableStatistics>, SourceError>;

    /// Price and revenue percentiles for a market/neighborhood/bedroom
    /// combination, or `None` when no percentile sample exists.
    async fn percentiles(
        &self,
        market: &str,
        neighborhood: &str,
        bedrooms: u8,
    ) -> Result<Option<PercentileStatistics>, SourceError>;

    /// Every combination the source has data for, for client guidance when a
    /// requested combination is absent.
    async fn supported_combinations(&self) -> Result<Vec<SupportedCombination>, SourceError>;

    /// All available markets.
    async fn markets(&self) -> Result<Vec<MarketInfo>, SourceError>;

    /// Neighborhoods within a market.
    async fn neighborhoods(&self, market: &str) -> Result<Vec<NeighborhoodInfo>, SourceError>;

    /// Available bed/bath configurations within a neighborhood.
    async fn configurations(
        &self,
        market: &str,
        neighborhood: &str,
    ) -> Result<Vec<ConfigurationInfo>, SourceError>;
}
