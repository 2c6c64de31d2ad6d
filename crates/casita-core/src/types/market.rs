//! Aggregated market data supplied by the data-source collaborator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated statistics for comparable listings in one
/// market/neighborhood/bedroom/bathroom combination.
///
/// `avg_occupancy` is expressed in days booked per year, not a fraction;
/// the revenue estimator converts it at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparableStatistics {
    /// Narrative profile for the exact bed/bath combination, when available.
    #[serde(default)]
    pub combo_profile: Option<String>,

    /// Neighborhood-level narrative profile, used as a fallback.
    #[serde(default)]
    pub neighborhood_profile: Option<String>,

    /// Short statements describing what drives successful listings here.
    #[serde(default)]
    pub success_factors: Vec<String>,

    /// Short statements describing risks for this combination.
    #[serde(default)]
    pub risk_factors: Vec<String>,

    /// Amenities that command a price premium in this segment.
    #[serde(default)]
    pub premium_amenities: Vec<String>,

    /// Number of guest reviews behind the insight set.
    #[serde(default)]
    pub review_count: u32,

    /// When the combo-level insights were computed.
    #[serde(default)]
    pub computed_at: Option<DateTime<Utc>>,

    /// When the neighborhood-level profile was generated.
    #[serde(default)]
    pub neighborhood_generated_at: Option<DateTime<Utc>>,

    /// Average trailing-365-day gross revenue across comparables, USD.
    pub avg_revenue: Decimal,

    /// Average occupancy in days booked per year.
    pub avg_occupancy: Decimal,

    /// Average nightly price across comparables, USD.
    pub avg_price: Decimal,

    /// Average guest rating.
    #[serde(default)]
    pub avg_rating: Decimal,

    /// Number of comparable listings behind the averages.
    pub listing_count: u32,
}

/// Price and revenue percentiles across comparable listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileStatistics {
    /// 25th percentile of trailing-365-day revenue, USD.
    pub revenue_p25: Decimal,
    /// 50th percentile of trailing-365-day revenue, USD.
    pub revenue_p50: Decimal,
    /// 75th percentile of trailing-365-day revenue, USD.
    pub revenue_p75: Decimal,
    /// 25th percentile of nightly price, USD.
    pub price_p25: Decimal,
    /// 50th percentile of nightly price, USD.
    pub price_p50: Decimal,
    /// 75th percentile of nightly price, USD.
    pub price_p75: Decimal,
    /// Number of listings in the percentile sample.
    pub comparables_count: u32,
}

/// One market/neighborhood/bed/bath combination the service has data for.
///
/// Displayed to clients when a requested combination has no data; the
/// `"<neighborhood> (<bedrooms>BR/<bathrooms>BA)"` rendering is part of the
/// client contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedCombination {
    /// Neighborhood name.
    pub neighborhood: String,
    /// Number of bedrooms.
    pub bedrooms: u8,
    /// Number of bathrooms.
    pub bathrooms: Decimal,
}

impl fmt::Display for SupportedCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}BR/{}BA)",
            self.neighborhood,
            self.bedrooms,
            self.bathrooms.normalize()
        )
    }
}

/// Summary information about one market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    /// Market identifier, e.g. `"san-diego"`.
    pub id: String,
    /// Display name, e.g. `"San Diego"`.
    pub name: String,
    /// Number of neighborhoods with data in this market.
    pub neighborhood_count: u32,
    /// Total comparable listings across the market.
    pub listing_count: u32,
}

/// Summary information about one neighborhood within a market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodInfo {
    /// Neighborhood name.
    pub name: String,
    /// Comparable listings in the neighborhood.
    pub listing_count: u32,
    /// Average nightly price, USD.
    pub avg_price: Decimal,
    /// Average occupancy in days booked per year.
    pub avg_occupancy: Decimal,
}

/// An available bed/bath configuration within a neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationInfo {
    /// Number of bedrooms.
    pub bedrooms: u8,
    /// Number of bathrooms.
    pub bathrooms: Decimal,
    /// Comparable listings with this configuration.
    pub listing_count: u32,
    /// Whether narrative insights exist for this configuration.
    pub has_insights: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn combination_display_format() {
        let combo = SupportedCombination {
            neighborhood: "North Park".to_string(),
            bedrooms: 2,
            bathrooms: dec!(2.0),
        };
        assert_eq!(combo.to_string(), "North Park (2BR/2BA)");

        let half_bath = SupportedCombination {
            neighborhood: "La Jolla".to_string(),
            bedrooms: 3,
            bathrooms: dec!(2.5),
        };
        assert_eq!(half_bath.to_string(), "La Jolla (3BR/2.5BA)");
    }
}
