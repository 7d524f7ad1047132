//! # Display Formatting
//!
//! Turns engine output into shop-readable text: round to a caller-specified
//! decimal precision (0-6), then strip insignificant trailing zeros.
//!
//! Display precision is a presentation concern. The engine computes at full
//! f64 precision and stays precision-agnostic; only the rendered string is
//! rounded.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::format::format_value;
//!
//! assert_eq!(format_value(5.89870495, 4), "5.8987");
//! assert_eq!(format_value(125.0, 4), "125");
//! assert_eq!(format_value(1.270000, 6), "1.27");
//! ```

/// Highest supported display precision (decimal places)
pub const MAX_PRECISION: u8 = 6;

/// Format a value to `precision` decimal places (clamped to 0-6), then strip
/// trailing zeros and any bare trailing decimal point.
///
/// Non-finite values have nothing to display and format to the empty string.
pub fn format_value(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let decimals = precision.min(MAX_PRECISION) as usize;
    let mut text = format!("{:.*}", decimals, value);

    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    // Tiny negatives can round to "-0"
    if text == "-0" {
        text = "0".to_string();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(format_value(5.89870495, 4), "5.8987");
        assert_eq!(format_value(107.6410761, 2), "107.64");
        assert_eq!(format_value(107.6410761, 0), "108");
    }

    #[test]
    fn test_strips_trailing_zeros() {
        assert_eq!(format_value(125.0, 4), "125");
        assert_eq!(format_value(1.27, 6), "1.27");
        assert_eq!(format_value(0.5, 3), "0.5");
    }

    #[test]
    fn test_precision_clamped() {
        // Anything above 6 behaves as 6
        assert_eq!(format_value(1.0 / 3.0, 9), format_value(1.0 / 3.0, 6));
        assert_eq!(format_value(1.0 / 3.0, 6), "0.333333");
    }

    #[test]
    fn test_non_finite_is_empty() {
        assert_eq!(format_value(f64::NAN, 4), "");
        assert_eq!(format_value(f64::INFINITY, 4), "");
        assert_eq!(format_value(f64::NEG_INFINITY, 0), "");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(format_value(-0.00001, 2), "0");
    }
}
