//! Decimal rounding for conversion results.

/// Round `value` to `dp` decimal places, ties to even.
///
/// Linear conversions round to 6 places; temperature and currency
/// round to 2.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round_ties_even() / factor
}
