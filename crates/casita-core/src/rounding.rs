//! Boundary rounding policy.
//!
//! Intermediate computations keep full `Decimal` precision; rounding happens
//! exactly once, when a value is placed into an output structure. Currency
//! amounts carry 2 decimal places, dimensionless ratios 4. `round_dp` uses
//! midpoint-to-even, matching the upstream data pipeline.

use rust_decimal::Decimal;

/// Rounds a currency amount to 2 decimal places.
pub fn currency(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Rounds a dimensionless ratio to 4 decimal places.
pub fn ratio(value: Decimal) -> Decimal {
    value.round_dp(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(currency(dec!(1234.5678)), dec!(1234.57));
        assert_eq!(currency(dec!(1234.5)), dec!(1234.5));
    }

    #[test]
    fn currency_midpoint_rounds_to_even() {
        assert_eq!(currency(dec!(0.125)), dec!(0.12));
        assert_eq!(currency(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn ratio_rounds_to_four_places() {
        assert_eq!(ratio(dec!(0.123456)), dec!(0.1235));
        assert_eq!(ratio(dec!(0.08)), dec!(0.08));
    }
}
