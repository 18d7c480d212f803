//! Fixed-precision rounding and display of computed values.

/// Round `value` to `decimals` places (half away from zero).
///
/// ```rust
/// use divider_core::format::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Format `value` with exactly `decimals` places.
///
/// Negative zero prints as zero so a refreshed field never shows `-0.00`.
///
/// ```rust
/// use divider_core::format::format_fixed;
///
/// assert_eq!(format_fixed(5.0, 2), "5.00");
/// assert_eq!(format_fixed(2.5, 6), "2.500000");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Round to `decimals` places, then format with exactly that many.
///
/// ```rust
/// use divider_core::format::format_rounded;
///
/// assert_eq!(format_rounded(0.125, 2), "0.13");
/// assert_eq!(format_rounded(5.0, 2), "5.00");
/// ```
pub fn format_rounded(value: f64, decimals: usize) -> String {
    format_fixed(round_to(value, decimals), decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(100.004, 2), 100.0);
        assert_eq!(round_to(-1.236, 2), -1.24);
    }

    #[test]
    fn test_round_to_huge_value_passes_through() {
        assert_eq!(round_to(1e308, 6), 1e308);
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(0.0, 6), "0.000000");
        assert_eq!(format_fixed(1.0 / 3.0, 2), "0.33");
    }

    #[test]
    fn test_format_rounded_rounds_half_away_from_zero() {
        assert_eq!(format_rounded(0.125, 2), "0.13");
        assert_eq!(format_rounded(-0.125, 2), "-0.13");
        assert_eq!(format_rounded(-0.001, 2), "0.00");
    }
}
