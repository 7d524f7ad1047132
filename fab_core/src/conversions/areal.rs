//! # Textile Areal Weight
//!
//! Converts fabric areal weight between gsm (grams per square meter) and the
//! imperial units woven-goods suppliers quote in: oz/yd² and oz/ft².
//!
//! Each function is the exact algebraic inverse of its pair, so composing a
//! pair yields identity within floating-point tolerance. Both imperial units
//! convert through gsm; there is no direct oz/yd² ⇄ oz/ft² path.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::conversions::areal::{gsm_to_oz_per_yd2, gsm_to_oz_per_ft2};
//!
//! // 200 gsm cloth, as a supplier would label it
//! assert!((gsm_to_oz_per_yd2(200.0) - 5.8987).abs() < 1e-4);
//! assert!((gsm_to_oz_per_ft2(200.0) - 0.65541).abs() < 1e-5);
//! ```

use crate::units::{G_PER_OZ, M2_PER_FT2, M2_PER_YD2};

/// gsm → oz/yd² (≈ gsm × 0.029493525)
pub fn gsm_to_oz_per_yd2(gsm: f64) -> f64 {
    gsm * M2_PER_YD2 / G_PER_OZ
}

/// oz/yd² → gsm (≈ oz/yd² × 33.9057475)
pub fn oz_per_yd2_to_gsm(oz_per_yd2: f64) -> f64 {
    oz_per_yd2 * G_PER_OZ / M2_PER_YD2
}

/// gsm → oz/ft² (≈ gsm × 0.0032770583)
pub fn gsm_to_oz_per_ft2(gsm: f64) -> f64 {
    gsm * M2_PER_FT2 / G_PER_OZ
}

/// oz/ft² → gsm (≈ oz/ft² × 305.1517273)
pub fn oz_per_ft2_to_gsm(oz_per_ft2: f64) -> f64 {
    oz_per_ft2 * G_PER_OZ / M2_PER_FT2
}
