//! # Input Boundary
//!
//! Filters between raw text input and the numeric engine. The engine is only
//! ever called with values these functions accept, so it never has to handle
//! NaN, infinity, or out-of-domain quantities mid-calculation.
//!
//! Rejected input yields `None` ("no result"), never a numeric error value:
//! presentations treat `None` as "nothing to display", not as zero.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::parse::parse_positive;
//!
//! assert_eq!(parse_positive("200"), Some(200.0));
//! assert_eq!(parse_positive(" 1.5 "), Some(1.5));
//! assert_eq!(parse_positive(""), None);
//! assert_eq!(parse_positive("abc"), None);
//! assert_eq!(parse_positive("-5"), None);
//! assert_eq!(parse_positive("0"), None);
//! ```

/// Parse a strictly positive, finite quantity from raw text.
pub fn parse_positive(raw: &str) -> Option<f64> {
    let value = parse_finite(raw)?;
    if value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a non-negative, finite quantity from raw text.
///
/// Used for the catalyst percentage, where 0% is a valid (if pointless) dose.
pub fn parse_non_negative(raw: &str) -> Option<f64> {
    let value = parse_finite(raw)?;
    if value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str accepts "NaN" and "inf"; those are not quantities.
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_numbers() {
        assert_eq!(parse_positive("200"), Some(200.0));
        assert_eq!(parse_positive("0.5"), Some(0.5));
        assert_eq!(parse_positive("  25  "), Some(25.0));
        assert_eq!(parse_positive("1e3"), Some(1000.0));
    }

    #[test]
    fn test_rejects_invalid_text() {
        assert_eq!(parse_positive(""), None);
        assert_eq!(parse_positive("   "), None);
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive("12abc"), None);
    }

    #[test]
    fn test_rejects_out_of_domain() {
        assert_eq!(parse_positive("-5"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-0.0"), None);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(parse_positive("NaN"), None);
        assert_eq!(parse_positive("inf"), None);
        assert_eq!(parse_positive("-inf"), None);
        assert_eq!(parse_non_negative("NaN"), None);
    }

    #[test]
    fn test_non_negative_allows_zero() {
        assert_eq!(parse_non_negative("0"), Some(0.0));
        assert_eq!(parse_non_negative("1.5"), Some(1.5));
        assert_eq!(parse_non_negative("-1.5"), None);
    }
}
