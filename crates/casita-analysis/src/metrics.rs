//! Derived ROI metrics.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use casita_core::rounding;
use casita_core::types::{AnalysisRequest, ExpenseBreakdown, ExpenseCategory, MetricsSection};

/// Derives the ROI metric set from gross revenue and the expense projection.
///
/// NOI excludes debt service; annual cash flow includes it. Zero-denominator
/// cases (no down payment, no purchase price, no nightly price) degrade to a
/// defined zero rather than raising. A pure function of its inputs —
/// recomputation yields bit-identical rounded output.
pub fn derive(
    request: &AnalysisRequest,
    gross_revenue: Decimal,
    expenses: &ExpenseBreakdown,
    avg_nightly_price: Decimal,
) -> MetricsSection {
    let mortgage = expenses.annual_value(ExpenseCategory::Mortgage);
    let noi = gross_revenue - (expenses.annual_total - mortgage);
    let cash_flow = gross_revenue - expenses.annual_total;

    let down_payment = request.down_payment();
    let purchase_price = request.purchase_price_or_zero();

    let cash_on_cash = if down_payment > Decimal::ZERO {
        cash_flow / down_payment
    } else {
        Decimal::ZERO
    };
    let cap_rate = if purchase_price > Decimal::ZERO {
        noi / purchase_price
    } else {
        Decimal::ZERO
    };
    let gross_yield = if purchase_price > Decimal::ZERO {
        gross_revenue / purchase_price
    } else {
        Decimal::ZERO
    };
    let break_even_occupancy = if avg_nightly_price > Decimal::ZERO {
        expenses.annual_total / (avg_nightly_price * dec!(365))
    } else {
        Decimal::ZERO
    };

    MetricsSection {
        cash_on_cash_return: rounding::ratio(cash_on_cash),
        cap_rate: rounding::ratio(cap_rate),
        net_operating_income: rounding::currency(noi),
        annual_cash_flow: rounding::currency(cash_flow),
        break_even_occupancy: rounding::ratio(break_even_occupancy),
        gross_yield: rounding::ratio(gross_yield),
    }
}
