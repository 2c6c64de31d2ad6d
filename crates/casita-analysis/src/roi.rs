//! Standalone simple ROI calculator.
//!
//! Takes fully-specified rental cash-flow inputs — no market lookup — and
//! returns monthly/annual profit plus a simple cap rate. Kept separate from
//! the full analysis pipeline; the two share nothing but the rounding policy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use casita_core::error::ValidationErrors;

/// Fully-specified rental cash-flow inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalInputs {
    /// Nightly rate, USD.
    pub nightly_rate: Decimal,
    /// Nights booked per month.
    pub nights_booked_per_month: i32,
    /// Cleaning fee charged per stay, USD.
    pub cleaning_fee_per_stay: Decimal,
    /// Stays per month.
    pub stays_per_month: i32,
    /// Fixed monthly costs (mortgage, utilities, etc.), USD.
    pub monthly_fixed_costs: Decimal,
    /// Purchase price, USD, for the cap-rate denominator.
    pub purchase_price: Decimal,
}

impl RentalInputs {
    /// Checks every field constraint, accumulating all violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.purchase_price <= Decimal::ZERO {
            errors.push("purchasePrice", "must be greater than zero");
        }
        if self.nightly_rate < Decimal::ZERO {
            errors.push("nightlyRate", "cannot be negative");
        }
        if self.nights_booked_per_month < 0 {
            errors.push("nightsBookedPerMonth", "cannot be negative");
        }
        if self.cleaning_fee_per_stay < Decimal::ZERO {
            errors.push("cleaningFeePerStay", "cannot be negative");
        }
        if self.stays_per_month < 0 {
            errors.push("staysPerMonth", "cannot be negative");
        }
        if self.monthly_fixed_costs < Decimal::ZERO {
            errors.push("monthlyFixedCosts", "cannot be negative");
        }

        errors.into_result()
    }
}

/// Result of a simple ROI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResult {
    /// Nightly revenue plus cleaning-fee revenue, USD/month.
    pub monthly_revenue: Decimal,
    /// Fixed costs, USD/month.
    pub monthly_costs: Decimal,
    /// Revenue minus costs, USD/month.
    pub monthly_profit: Decimal,
    /// Monthly profit annualized, USD/year.
    pub annual_profit: Decimal,
    /// Annual profit over purchase price, as a percentage rounded to 2 dp.
    pub cap_rate_percent: Decimal,
}

/// Calculates simple rental ROI metrics.
pub fn calculate(inputs: &RentalInputs) -> Result<RentalResult, ValidationErrors> {
    inputs.validate()?;

    let monthly_revenue = inputs.nightly_rate * Decimal::from(inputs.nights_booked_per_month)
        + inputs.cleaning_fee_per_stay * Decimal::from(inputs.stays_per_month);
    let monthly_costs = inputs.monthly_fixed_costs;
    let monthly_profit = monthly_revenue - monthly_costs;
    let annual_profit = monthly_profit * dec!(12);
    let cap_rate_percent =
        (annual_profit / inputs.purchase_price * Decimal::ONE_HUNDRED).round_dp(2);

    Ok(RentalResult {
        monthly_revenue,
        monthly_costs,
        monthly_profit,
        annual_profit,
        cap_rate_percent,
    })
}
