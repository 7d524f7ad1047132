//! # Roll Length
//!
//! Derives the linear length of a fabric roll from its total weight, the
//! cloth's areal weight, and the roll width.
//!
//! ## Assumptions
//!
//! - The quoted roll weight is cloth only (no core or packaging)
//! - Areal weight is uniform along the roll
//!
//! The cloth area follows directly from mass over areal weight
//! (grams ÷ grams-per-square-meter = square meters), and length is that area
//! spread across the roll width.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::conversions::roll::{calculate, RollInput};
//! use fab_core::units::{MassUnit, WidthUnit};
//!
//! let input = RollInput {
//!     areal_weight_gsm: 200.0,
//!     roll_weight: 25.0,
//!     weight_unit: MassUnit::Kilograms,
//!     roll_width: 50.0,
//!     width_unit: WidthUnit::Inches,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.area_m2 - 125.0).abs() < 1e-9);
//! assert!((result.length_yd - 107.6391).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};
use crate::units::{MassUnit, WidthUnit, M_TO_YD};

/// Input parameters for a roll-length calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "areal_weight_gsm": 200.0,
///   "roll_weight": 25.0,
///   "weight_unit": "kilograms",
///   "roll_width": 50.0,
///   "width_unit": "inches"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollInput {
    /// Areal weight of the cloth in gsm
    pub areal_weight_gsm: f64,

    /// Total roll weight, in `weight_unit`
    pub roll_weight: f64,

    /// Unit of `roll_weight`
    pub weight_unit: MassUnit,

    /// Roll width, in `width_unit`
    pub roll_width: f64,

    /// Unit of `roll_width`
    pub width_unit: WidthUnit,
}

impl RollInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        if !self.areal_weight_gsm.is_finite() || self.areal_weight_gsm <= 0.0 {
            return Err(ConvError::invalid_input(
                "areal_weight_gsm",
                self.areal_weight_gsm.to_string(),
                "Areal weight must be positive",
            ));
        }
        if !self.roll_weight.is_finite() || self.roll_weight <= 0.0 {
            return Err(ConvError::invalid_input(
                "roll_weight",
                self.roll_weight.to_string(),
                "Roll weight must be positive",
            ));
        }
        if !self.roll_width.is_finite() || self.roll_width <= 0.0 {
            return Err(ConvError::invalid_input(
                "roll_width",
                self.roll_width.to_string(),
                "Roll width must be positive",
            ));
        }
        Ok(())
    }

    /// Roll weight normalized to grams
    pub fn mass_g(&self) -> f64 {
        self.weight_unit.to_grams(self.roll_weight)
    }

    /// Roll width normalized to meters
    pub fn width_m(&self) -> f64 {
        self.width_unit.to_meters(self.roll_width)
    }
}

/// Results from a roll-length calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 125.0,
///   "length_m": 98.4252,
///   "length_yd": 107.6391
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// Cloth area on the roll (m²)
    pub area_m2: f64,

    /// Roll length in meters
    pub length_m: f64,

    /// Roll length in yards
    pub length_yd: f64,
}

/// Calculate roll length.
///
/// # Arguments
///
/// * `input` - Roll parameters
///
/// # Returns
///
/// * `Ok(RollResult)` - Derived area and lengths
/// * `Err(ConvError)` - If inputs are invalid
pub fn calculate(input: &RollInput) -> ConvResult<RollResult> {
    input.validate()?;

    let area_m2 = input.mass_g() / input.areal_weight_gsm;
    let length_m = area_m2 / input.width_m();
    let length_yd = length_m * M_TO_YD;

    Ok(RollResult {
        area_m2,
        length_m,
        length_yd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_roll() -> RollInput {
        RollInput {
            areal_weight_gsm: 200.0,
            roll_weight: 25.0,
            weight_unit: MassUnit::Kilograms,
            roll_width: 50.0,
            width_unit: WidthUnit::Inches,
        }
    }

    #[test]
    fn test_roll_length() {
        let result = calculate(&test_roll()).unwrap();

        // 25 kg = 25000 g; 25000 / 200 gsm = 125 m²
        assert!((result.area_m2 - 125.0).abs() < 1e-9);
        // 50 in = 1.27 m; 125 / 1.27 = 98.4252 m
        assert!((result.length_m - 98.42519685).abs() < 1e-6);
        // 98.42519685 / 0.9144 = 107.6391 yd
        assert!((result.length_yd - 107.63910417).abs() < 1e-6);
    }

    #[test]
    fn test_pound_roll_matches_metric() {
        let metric = calculate(&test_roll()).unwrap();

        let mut imperial = test_roll();
        imperial.roll_weight = 25_000.0 / 453.59237; // same mass in lb
        imperial.weight_unit = MassUnit::Pounds;
        let result = calculate(&imperial).unwrap();

        assert!((result.length_m - metric.length_m).abs() < 1e-9);
    }

    #[test]
    fn test_width_units_agree() {
        let inches = calculate(&test_roll()).unwrap();

        let mut mm = test_roll();
        mm.roll_width = 1270.0;
        mm.width_unit = WidthUnit::Millimeters;
        let result = calculate(&mm).unwrap();

        assert!((result.length_yd - inches.length_yd).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut roll = test_roll();
        roll.areal_weight_gsm = 0.0;
        assert!(calculate(&roll).is_err());

        let mut roll = test_roll();
        roll.roll_weight = -5.0;
        assert!(calculate(&roll).is_err());

        let mut roll = test_roll();
        roll.roll_width = f64::NAN;
        assert!(calculate(&roll).is_err());
    }

    #[test]
    fn test_serialization() {
        let roll = test_roll();
        let json = serde_json::to_string_pretty(&roll).unwrap();
        let roundtrip: RollInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roll.roll_weight, roundtrip.roll_weight);
        assert_eq!(roll.width_unit, roundtrip.width_unit);
    }
}
