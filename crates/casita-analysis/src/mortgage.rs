//! Fixed-rate mortgage amortization.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Level monthly payment of a fully-amortizing fixed-rate loan.
///
/// `P x r x (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// payment count. A non-positive principal means no loan (payment 0); a zero
/// rate degrades to straight-line repayment. The result keeps full precision —
/// rounding to cents happens where the value is surfaced, so the annuity
/// factor never compounds a rounding error.
///
/// # Arguments
///
/// * `loan_amount` - Financed principal, USD
/// * `annual_rate` - Nominal annual rate as a percentage, e.g. `6.89`
/// * `term_years` - Loan term in years
pub fn monthly_payment(loan_amount: Decimal, annual_rate: Decimal, term_years: u32) -> Decimal {
    if loan_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let monthly_rate = annual_rate / Decimal::ONE_HUNDRED / dec!(12);
    let payments = Decimal::from(term_years * 12);

    if monthly_rate.is_zero() {
        return loan_amount / payments;
    }

    let factor = (Decimal::ONE + monthly_rate).powi(i64::from(term_years * 12));
    loan_amount * monthly_rate * factor / (factor - Decimal::ONE)
}
