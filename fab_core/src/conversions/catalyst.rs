//! # Catalyst Dosing
//!
//! Computes the catalyst volume for a resin batch from a v/v percentage, plus
//! the shop-friendly normalized dosing rates (cc/gal and oz/gal).
//!
//! The normalized rates depend only on the percentage, not on the batch size:
//! they answer "how much catalyst per gallon at this percentage" no matter
//! how much resin is actually being mixed.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::conversions::catalyst::{calculate, CatalystInput};
//! use fab_core::units::VolumeUnit;
//!
//! // 1.5% MEKP on a gallon of polyester resin
//! let input = CatalystInput {
//!     percent: 1.5,
//!     resin_volume: 1.0,
//!     resin_unit: VolumeUnit::Gallons,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.catalyst_cc - 56.781177).abs() < 1e-5);
//! assert!((result.oz_per_gal - 1.92).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};
use crate::units::{VolumeUnit, FLOZ_TO_ML, GAL_TO_ML};

/// Input parameters for a catalyst dose.
///
/// ## JSON Example
///
/// ```json
/// {
///   "percent": 1.5,
///   "resin_volume": 1.0,
///   "resin_unit": "gallons"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalystInput {
    /// Catalyst percentage, v/v (e.g., 1.5 for 1.5%)
    pub percent: f64,

    /// Amount of resin being catalyzed, in `resin_unit`
    pub resin_volume: f64,

    /// Unit of `resin_volume`
    pub resin_unit: VolumeUnit,
}

impl CatalystInput {
    /// Validate input parameters.
    ///
    /// Percent may be zero (no catalyst) but not negative; resin volume must
    /// be strictly positive.
    pub fn validate(&self) -> ConvResult<()> {
        if !self.percent.is_finite() || self.percent < 0.0 {
            return Err(ConvError::invalid_input(
                "percent",
                self.percent.to_string(),
                "Percentage cannot be negative",
            ));
        }
        if !self.resin_volume.is_finite() || self.resin_volume <= 0.0 {
            return Err(ConvError::invalid_input(
                "resin_volume",
                self.resin_volume.to_string(),
                "Resin volume must be positive",
            ));
        }
        Ok(())
    }

    /// Resin volume normalized to milliliters
    pub fn resin_ml(&self) -> f64 {
        self.resin_unit.to_milliliters(self.resin_volume)
    }
}

/// Results from a catalyst-dosing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "catalyst_ml": 56.781177,
///   "catalyst_cc": 56.781177,
///   "catalyst_fl_oz": 1.92,
///   "cc_per_gal": 56.781177,
///   "oz_per_gal": 1.92
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalystResult {
    /// Catalyst volume for this batch (mL)
    pub catalyst_ml: f64,

    /// Catalyst volume in cc (1 mL = 1 cc)
    pub catalyst_cc: f64,

    /// Catalyst volume in US fluid ounces
    pub catalyst_fl_oz: f64,

    /// Normalized dosing rate: cc of catalyst per gallon of resin
    pub cc_per_gal: f64,

    /// Normalized dosing rate: fl oz of catalyst per gallon of resin
    pub oz_per_gal: f64,
}

/// Calculate catalyst volumes and dosing rates.
///
/// # Arguments
///
/// * `input` - Percentage and resin quantity
///
/// # Returns
///
/// * `Ok(CatalystResult)` - Batch volumes and normalized rates
/// * `Err(ConvError)` - If inputs are invalid
pub fn calculate(input: &CatalystInput) -> ConvResult<CatalystResult> {
    input.validate()?;

    let fraction = input.percent / 100.0;

    let catalyst_ml = input.resin_ml() * fraction;
    let catalyst_cc = catalyst_ml;
    let catalyst_fl_oz = catalyst_ml / FLOZ_TO_ML;

    // Reference rates per gallon at the same percentage, independent of the
    // batch size entered
    let cc_per_gal = GAL_TO_ML * fraction;
    let oz_per_gal = cc_per_gal / FLOZ_TO_ML;

    Ok(CatalystResult {
        catalyst_ml,
        catalyst_cc,
        catalyst_fl_oz,
        cc_per_gal,
        oz_per_gal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_batch() -> CatalystInput {
        CatalystInput {
            percent: 1.5,
            resin_volume: 1.0,
            resin_unit: VolumeUnit::Gallons,
        }
    }

    #[test]
    fn test_gallon_at_one_and_a_half_percent() {
        let result = calculate(&test_batch()).unwrap();

        // 3785.411784 mL * 0.015
        assert!((result.catalyst_ml - 56.78117676).abs() < 1e-6);
        assert_eq!(result.catalyst_cc, result.catalyst_ml);
        // A gallon is exactly 128 fl oz, so 1.5% lands on exactly 1.92 oz
        assert!((result.catalyst_fl_oz - 1.92).abs() < 1e-9);
        assert!((result.cc_per_gal - 56.78117676).abs() < 1e-6);
        assert!((result.oz_per_gal - 1.92).abs() < 1e-9);
    }

    #[test]
    fn test_rate_independent_of_batch_size() {
        let one_gal = calculate(&test_batch()).unwrap();

        let mut big_batch = test_batch();
        big_batch.resin_volume = 55.0;
        let drum = calculate(&big_batch).unwrap();

        assert_eq!(one_gal.cc_per_gal, drum.cc_per_gal);
        assert_eq!(one_gal.oz_per_gal, drum.oz_per_gal);
        assert!((drum.catalyst_ml - one_gal.catalyst_ml * 55.0).abs() < 1e-6);
    }

    #[test]
    fn test_quart_batch() {
        let input = CatalystInput {
            percent: 2.0,
            resin_volume: 1.0,
            resin_unit: VolumeUnit::Quarts,
        };
        let result = calculate(&input).unwrap();
        // 946.352946 mL * 0.02
        assert!((result.catalyst_ml - 18.92705892).abs() < 1e-6);
    }

    #[test]
    fn test_zero_percent_is_valid() {
        let mut input = test_batch();
        input.percent = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.catalyst_ml, 0.0);
        assert_eq!(result.cc_per_gal, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_batch();
        input.percent = -1.0;
        assert!(calculate(&input).is_err());

        let mut input = test_batch();
        input.resin_volume = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_batch();
        input.percent = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_batch();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CatalystInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.percent, roundtrip.percent);
        assert_eq!(input.resin_unit, roundtrip.resin_unit);
    }
}
