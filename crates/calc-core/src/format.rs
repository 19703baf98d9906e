//! Display formatting for accumulator values

/// Smallest magnitude that no longer fits an `i64` (2^63)
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Formats a result for the display
///
/// Whole numbers that fit an `i64` drop the decimal point entirely. Every
/// other value uses the default `f64` rendering.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < I64_LIMIT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
