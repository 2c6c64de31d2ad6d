//! Revenue estimation and market context.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use casita_core::rounding;
use casita_core::types::{
    ComparableStatistics, OccupancyInfo, PercentileStatistics, RangeInfo, RateInfo,
    RevenueSection, SeasonalRange,
};

use crate::config::AnalysisConfig;

/// Selects the authoritative annual gross revenue figure.
///
/// The comparable average wins when positive; otherwise the 50th-percentile
/// trailing revenue; otherwise zero.
pub fn select_gross_revenue(
    stats: &ComparableStatistics,
    percentiles: Option<&PercentileStatistics>,
) -> Decimal {
    if stats.avg_revenue > Decimal::ZERO {
        stats.avg_revenue
    } else {
        percentiles.map_or(Decimal::ZERO, |p| p.revenue_p50)
    }
}

/// Buckets a nightly price against the percentile boundaries.
///
/// Returns 25/50/75/90; 50 is the neutral default when no percentile sample
/// exists.
pub fn nightly_rate_percentile(
    value: Decimal,
    percentiles: Option<&PercentileStatistics>,
) -> u8 {
    let Some(p) = percentiles else {
        return 50;
    };
    if value <= p.price_p25 {
        25
    } else if value <= p.price_p50 {
        50
    } else if value <= p.price_p75 {
        75
    } else {
        90
    }
}

/// Builds the revenue section of the report.
///
/// Occupancy is converted from days booked per year to a fraction; the
/// seasonal band is surfaced straight from configuration as a fixed
/// reference, not computed.
pub fn build_section(
    stats: &ComparableStatistics,
    percentiles: Option<&PercentileStatistics>,
    config: &AnalysisConfig,
) -> RevenueSection {
    let occupancy_fraction = if stats.avg_occupancy > Decimal::ZERO {
        stats.avg_occupancy / dec!(365)
    } else {
        Decimal::ZERO
    };

    RevenueSection {
        nightly_rate: RateInfo {
            value: rounding::currency(stats.avg_price),
            percentile: nightly_rate_percentile(stats.avg_price, percentiles),
            range: RangeInfo {
                p25: percentiles.map_or(Decimal::ZERO, |p| p.price_p25),
                p50: percentiles.map_or(Decimal::ZERO, |p| p.price_p50),
                p75: percentiles.map_or(Decimal::ZERO, |p| p.price_p75),
            },
        },
        occupancy_rate: OccupancyInfo {
            value: occupancy_fraction.round_dp(2),
            seasonal_range: SeasonalRange {
                low: config.seasonal_occupancy_low,
                high: config.seasonal_occupancy_high,
            },
        },
        gross_annual_revenue: rounding::currency(stats.avg_revenue),
        comparables_count: percentiles.map_or(stats.listing_count, |p| p.comparables_count),
    }
}
