//! Configuration constants for the analysis engine.
//!
//! Every rate and fee assumption the engine uses lives here as a named value.
//! Defaults reproduce the published San Diego benchmarks the projections are
//! calibrated against; deployments override individual fields through the
//! server configuration file. Pure data, no behavior.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Rate and fee assumptions for investment analysis.
///
/// All rates are fractions (`0.0125` for 1.25%) except
/// `default_interest_rate`, which is a percentage to match how mortgage
/// rates are quoted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Annual interest rate (percent) used when the request omits one.
    /// Freddie Mac PMMS 30-year fixed.
    pub default_interest_rate: Decimal,

    /// Property tax as a fraction of purchase price. San Diego County.
    pub property_tax_rate: Decimal,

    /// Annual STR insurance estimate, USD.
    pub annual_insurance: Decimal,

    /// Annual utilities estimate, USD.
    pub annual_utilities: Decimal,

    /// Cost per cleaning turn, USD.
    pub cleaning_cost_per_turn: Decimal,

    /// Estimated turns per year when no average nightly price is available.
    pub default_estimated_turns: Decimal,

    /// Platform fee as a fraction of gross revenue. Airbnb host-only fee.
    pub platform_fee_rate: Decimal,

    /// Maintenance as a fraction of gross revenue. VRMA benchmark.
    pub maintenance_rate: Decimal,

    /// Transient occupancy tax as a fraction of gross revenue.
    /// San Diego Municipal Code 35.0103.
    pub occupancy_tax_rate: Decimal,

    /// Annual STR permit fee, USD. San Diego STRO renewal.
    pub permit_fee: Decimal,

    /// Professional management fee as a fraction of gross revenue.
    pub management_rate: Decimal,

    /// Low-season occupancy estimate as a fraction.
    pub seasonal_occupancy_low: Decimal,

    /// High-season occupancy estimate as a fraction.
    pub seasonal_occupancy_high: Decimal,

    /// Cash-on-cash return at or above which the recommendation is "buy".
    pub buy_threshold: Decimal,

    /// Cash-on-cash return at or above which the recommendation is
    /// "consider". Below it, "caution".
    pub consider_threshold: Decimal,

    /// Cash-on-cash return at or above which the headline reads "Strong".
    pub strong_threshold: Decimal,

    /// Listing count at or above which confidence is "high".
    pub high_confidence_listing_count: u32,

    /// Listing count at or above which confidence is "medium".
    /// Below it, "low".
    pub medium_confidence_listing_count: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_interest_rate: dec!(6.89),
            property_tax_rate: dec!(0.0125),
            annual_insurance: dec!(2400),
            annual_utilities: dec!(3000),
            cleaning_cost_per_turn: dec!(60),
            default_estimated_turns: dec!(80),
            platform_fee_rate: dec!(0.03),
            maintenance_rate: dec!(0.02),
            occupancy_tax_rate: dec!(0.105),
            permit_fee: dec!(125),
            management_rate: dec!(0.20),
            seasonal_occupancy_low: dec!(0.55),
            seasonal_occupancy_high: dec!(0.89),
            buy_threshold: dec!(0.08),
            consider_threshold: dec!(0.05),
            strong_threshold: dec!(0.06),
            high_confidence_listing_count: 50,
            medium_confidence_listing_count: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_benchmarks() {
        let config = AnalysisConfig::default();
        assert_eq!(config.default_interest_rate, dec!(6.89));
        assert_eq!(config.property_tax_rate, dec!(0.0125));
        assert_eq!(config.occupancy_tax_rate, dec!(0.105));
        assert_eq!(config.high_confidence_listing_count, 50);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: AnalysisConfig =
            toml::from_str("default_interest_rate = 7.25\npermit_fee = 150").unwrap();
        assert_eq!(config.default_interest_rate, dec!(7.25));
        assert_eq!(config.permit_fee, dec!(150));
        assert_eq!(config.management_rate, dec!(0.20));
    }
}
