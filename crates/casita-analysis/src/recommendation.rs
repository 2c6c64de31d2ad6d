//! Recommendation, confidence, and headline classification.
//!
//! Pure threshold functions. Thresholds are inclusive at the lower bound of
//! each tier, so an exact boundary value resolves to the higher tier.

use rust_decimal::Decimal;

use casita_core::types::{Confidence, Recommendation};

use crate::config::AnalysisConfig;

/// Maps cash-on-cash return to a recommendation tier.
pub fn recommendation(cash_on_cash: Decimal, config: &AnalysisConfig) -> Recommendation {
    if cash_on_cash >= config.buy_threshold {
        Recommendation::Buy
    } else if cash_on_cash >= config.consider_threshold {
        Recommendation::Consider
    } else {
        Recommendation::Caution
    }
}

/// Maps the comparable-listing count to a confidence tier.
pub fn confidence(listing_count: u32, config: &AnalysisConfig) -> Confidence {
    if listing_count >= config.high_confidence_listing_count {
        Confidence::High
    } else if listing_count >= config.medium_confidence_listing_count {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Builds the one-sentence headline embedding the cash-on-cash percentage.
pub fn headline(cash_on_cash: Decimal, config: &AnalysisConfig) -> String {
    let strength = if cash_on_cash >= config.strong_threshold {
        "Strong"
    } else {
        "Moderate"
    };
    let pct = (cash_on_cash * Decimal::ONE_HUNDRED).round_dp(1);
    format!(
        "{} investment potential with {}% cash-on-cash return",
        strength, pct
    )
}
