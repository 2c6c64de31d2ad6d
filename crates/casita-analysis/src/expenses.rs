//! Annual expense projection.
//!
//! Builds the full itemized breakdown for one analysis. Every line item
//! carries a provenance string identifying whether the figure is
//! user-supplied, a fixed external benchmark, or derived — a user-facing
//! transparency requirement, so the phrasing is stable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use casita_core::formatting::{group_thousands, percent};
use casita_core::rounding;
use casita_core::types::{AnalysisRequest, ExpenseBreakdown, ExpenseCategory, ExpenseItem};

use crate::config::AnalysisConfig;
use crate::mortgage;

/// Projects the full annual expense breakdown.
///
/// Category values are rounded to cents as they enter the breakdown; the
/// annual total is the exact sum of those rounded values, so
/// `annual_total == Σ(category values)` holds for every output.
///
/// # Arguments
///
/// * `request` - Validated financing parameters
/// * `gross_revenue` - Authoritative annual gross revenue estimate, USD
/// * `avg_nightly_price` - Average comparable nightly price, USD
/// * `interest_rate` - Resolved annual rate (request override or benchmark)
/// * `config` - Rate and fee assumptions
pub fn project(
    request: &AnalysisRequest,
    gross_revenue: Decimal,
    avg_nightly_price: Decimal,
    interest_rate: Decimal,
    config: &AnalysisConfig,
) -> ExpenseBreakdown {
    let loan_amount = request.loan_amount();
    let monthly_mortgage =
        mortgage::monthly_payment(loan_amount, interest_rate, request.loan_term_years);
    let annual_mortgage = monthly_mortgage * dec!(12);

    let property_tax = request.purchase_price_or_zero() * config.property_tax_rate;
    let hoa = request.hoa_monthly * dec!(12);

    // Turns estimated from revenue/price; configured fallback when no
    // comparable price exists.
    let estimated_turns = if avg_nightly_price > Decimal::ZERO {
        gross_revenue / avg_nightly_price
    } else {
        config.default_estimated_turns
    };
    let cleaning = estimated_turns * config.cleaning_cost_per_turn;

    let platform_fees = gross_revenue * config.platform_fee_rate;
    let maintenance = gross_revenue * config.maintenance_rate;
    let occupancy_tax = gross_revenue * config.occupancy_tax_rate;
    let property_management = if request.self_managed {
        Decimal::ZERO
    } else {
        gross_revenue * config.management_rate
    };

    let mut breakdown = BTreeMap::new();
    let mut insert = |category: ExpenseCategory, value: Decimal, source: String| {
        breakdown.insert(
            category,
            ExpenseItem {
                value: rounding::currency(value),
                monthly: false,
                source,
            },
        );
    };

    insert(
        ExpenseCategory::Mortgage,
        annual_mortgage,
        format!(
            "Calculated: ${} loan @ {}% (Freddie Mac PMMS), {}yr",
            group_thousands(loan_amount),
            interest_rate.normalize(),
            request.loan_term_years
        ),
    );
    insert(
        ExpenseCategory::PropertyTax,
        property_tax,
        format!(
            "San Diego County {}% of purchase price",
            percent(config.property_tax_rate)
        ),
    );
    insert(
        ExpenseCategory::Insurance,
        config.annual_insurance,
        "Estimated STR insurance, San Diego metro".to_string(),
    );
    insert(
        ExpenseCategory::Hoa,
        hoa,
        if request.hoa_monthly > Decimal::ZERO {
            format!("User provided: ${}/month", request.hoa_monthly.normalize())
        } else {
            "None".to_string()
        },
    );
    insert(
        ExpenseCategory::Utilities,
        config.annual_utilities,
        format!("SDG&E average {}BR, 2024", request.bedrooms),
    );
    insert(
        ExpenseCategory::Cleaning,
        cleaning,
        format!(
            "Calculated: ${}/turn x estimated {} turns/year",
            config.cleaning_cost_per_turn.normalize(),
            group_thousands(estimated_turns)
        ),
    );
    insert(
        ExpenseCategory::PlatformFees,
        platform_fees,
        format!(
            "Airbnb {}% host-only fee",
            percent(config.platform_fee_rate)
        ),
    );
    insert(
        ExpenseCategory::Maintenance,
        maintenance,
        format!(
            "{}% of gross revenue (VRMA benchmark)",
            percent(config.maintenance_rate)
        ),
    );
    insert(
        ExpenseCategory::OccupancyTax,
        occupancy_tax,
        format!(
            "San Diego TOT {}% (Municipal Code 35.0103)",
            percent(config.occupancy_tax_rate)
        ),
    );
    insert(
        ExpenseCategory::Permit,
        config.permit_fee,
        "San Diego STRO annual renewal, 2024".to_string(),
    );
    insert(
        ExpenseCategory::PropertyManagement,
        property_management,
        if request.self_managed {
            "Self-managed (user selected)".to_string()
        } else {
            format!("{}% of gross revenue", percent(config.management_rate))
        },
    );

    let annual_total: Decimal = breakdown.values().map(|item| item.value).sum();

    ExpenseBreakdown {
        annual_total,
        monthly: rounding::currency(annual_total / dec!(12)),
        breakdown,
    }
}
