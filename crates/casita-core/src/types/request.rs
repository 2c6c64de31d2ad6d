//! Analysis request parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;

/// Request parameters for a property investment analysis.
///
/// Constructed once (typically deserialized from the wire), validated with
/// [`AnalysisRequest::validate`], and treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Market identifier, e.g. `"san-diego"`.
    pub market: String,

    /// Neighborhood name to analyze.
    pub neighborhood: String,

    /// Number of bedrooms (0-10).
    #[serde(default)]
    pub bedrooms: u8,

    /// Number of bathrooms (0.5-10, half-bath granularity allowed).
    pub bathrooms: Option<Decimal>,

    /// Property purchase price in USD.
    pub purchase_price: Option<Decimal>,

    /// Down payment percentage (0-100). Defaults to 20.
    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: Decimal,

    /// Annual interest rate as a percentage, e.g. `7.0` for 7%.
    /// Falls back to the configured benchmark rate when absent.
    pub interest_rate: Option<Decimal>,

    /// Loan term in years. Defaults to 30.
    #[serde(default = "default_loan_term_years")]
    pub loan_term_years: u32,

    /// Whether the property will be self-managed. Defaults to `true`.
    #[serde(default = "default_self_managed")]
    pub self_managed: bool,

    /// Monthly HOA fee in USD. Defaults to 0.
    #[serde(default)]
    pub hoa_monthly: Decimal,
}

fn default_down_payment_percent() -> Decimal {
    dec!(20)
}

fn default_loan_term_years() -> u32 {
    30
}

fn default_self_managed() -> bool {
    true
}

impl AnalysisRequest {
    /// Checks every field constraint, accumulating all violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.market.trim().is_empty() {
            errors.push("market", "is required");
        }
        if self.neighborhood.trim().is_empty() {
            errors.push("neighborhood", "is required");
        }
        if self.bedrooms > 10 {
            errors.push("bedrooms", "must be between 0 and 10");
        }
        match self.bathrooms {
            None => errors.push("bathrooms", "is required"),
            Some(b) if b < dec!(0.5) || b > dec!(10) => {
                errors.push("bathrooms", "must be between 0.5 and 10");
            }
            Some(_) => {}
        }
        match self.purchase_price {
            Some(p) if p > Decimal::ZERO => {}
            _ => errors.push("purchasePrice", "must be greater than zero"),
        }
        if self.down_payment_percent < Decimal::ZERO || self.down_payment_percent > dec!(100) {
            errors.push("downPaymentPercent", "must be between 0 and 100");
        }
        if let Some(rate) = self.interest_rate {
            if rate < Decimal::ZERO || rate > dec!(30) {
                errors.push("interestRate", "must be between 0 and 30");
            }
        }
        if self.loan_term_years < 1 || self.loan_term_years > 40 {
            errors.push("loanTermYears", "must be between 1 and 40");
        }
        if self.hoa_monthly < Decimal::ZERO {
            errors.push("hoaMonthly", "cannot be negative");
        }

        errors.into_result()
    }

    /// Purchase price, defaulting to zero when absent.
    ///
    /// Validation rejects absent/non-positive prices before analysis, so the
    /// zero default only feeds the documented divide-by-zero guards.
    pub fn purchase_price_or_zero(&self) -> Decimal {
        self.purchase_price.unwrap_or(Decimal::ZERO)
    }

    /// Cash invested up front: `purchasePrice x downPaymentPercent / 100`.
    pub fn down_payment(&self) -> Decimal {
        self.purchase_price_or_zero() * self.down_payment_percent / Decimal::ONE_HUNDRED
    }

    /// Financed principal: purchase price minus down payment.
    pub fn loan_amount(&self) -> Decimal {
        self.purchase_price_or_zero() - self.down_payment()
    }

    /// Bathrooms, defaulting to zero when absent (only reachable pre-validation).
    pub fn bathrooms_or_zero(&self) -> Decimal {
        self.bathrooms.unwrap_or(Decimal::ZERO)
    }
}
