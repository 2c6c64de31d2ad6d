//! Display formatting helpers for user-facing provenance and assumption
//! strings.

use rust_decimal::Decimal;

/// Formats a decimal as a whole number with thousands separators.
///
/// Used in provenance strings like `"$320,000 loan"`. The value is rounded to
/// the nearest whole number first.
pub fn group_thousands(value: Decimal) -> String {
    let whole = value.round_dp(0).trunc();
    let s = whole.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let grouped: Vec<String> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();

    format!("{}{}", sign, grouped.join(","))
}

/// Renders a fractional rate as a percentage with trailing zeros stripped.
///
/// `0.0125` becomes `1.25`, `0.20` becomes `20`.
pub fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
