//! # Unit Types
//!
//! Closed unit enumerations and the fixed conversion factors behind them.
//!
//! ## Design Philosophy
//!
//! Each measurement family (mass, width, volume) has one internal base unit
//! (grams, meters, milliliters) and a table of multipliers to that base.
//! Conversion always routes input-unit → base → output-unit, never
//! unit-to-unit directly, so the factor table stays linear: adding a unit
//! means adding one variant and one match arm, not a row of direct
//! conversions.
//!
//! We use plain f64 values tagged by enum rather than a full units library
//! because:
//! - The shop uses a small, fixed set of units
//! - JSON serialization stays clean (short lowercase tags)
//! - Minimal runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use fab_core::units::{MassUnit, WidthUnit};
//!
//! let mass_g = MassUnit::Kilograms.to_grams(25.0);
//! assert_eq!(mass_g, 25_000.0);
//!
//! let width_m = WidthUnit::Inches.to_meters(50.0);
//! assert!((width_m - 1.27).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Factors
// ============================================================================
// Exact enough for shop work. Area factors are the squared length factors
// (1 yd = 0.9144 m, 1 ft = 0.3048 m).

/// Square meters per square yard (0.9144²)
pub const M2_PER_YD2: f64 = 0.83612736;

/// Square meters per square foot (0.3048²)
pub const M2_PER_FT2: f64 = 0.09290304;

/// Grams per avoirdupois ounce
pub const G_PER_OZ: f64 = 28.349523125;

/// Grams per pound
pub const LB_TO_G: f64 = 453.59237;

/// Meters per inch
pub const IN_TO_M: f64 = 0.0254;

/// Meters per millimeter
pub const MM_TO_M: f64 = 0.001;

/// Meters per centimeter
pub const CM_TO_M: f64 = 0.01;

/// Yards per meter
pub const M_TO_YD: f64 = 1.0 / 0.9144;

/// Milliliters per US gallon
pub const GAL_TO_ML: f64 = 3785.411784;

/// Milliliters per US quart
pub const QT_TO_ML: f64 = 946.352946;

/// Milliliters per liter
pub const L_TO_ML: f64 = 1000.0;

/// Milliliters per US fluid ounce
pub const FLOZ_TO_ML: f64 = 29.5735295625;

// ============================================================================
// Mass Units (base: grams)
// ============================================================================

/// Roll weight units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl MassUnit {
    /// Multiplier from this unit to grams
    pub fn grams_per_unit(self) -> f64 {
        match self {
            MassUnit::Kilograms => 1000.0,
            MassUnit::Pounds => LB_TO_G,
        }
    }

    /// Normalize a value in this unit to grams
    pub fn to_grams(self, value: f64) -> f64 {
        value * self.grams_per_unit()
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Pounds => "lb",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for MassUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(MassUnit::Kilograms),
            "lb" | "lbs" => Ok(MassUnit::Pounds),
            other => Err(format!("unknown mass unit: {}", other)),
        }
    }
}

// ============================================================================
// Width Units (base: meters)
// ============================================================================

/// Roll width units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthUnit {
    #[default]
    Inches,
    Millimeters,
    Centimeters,
    Meters,
}

impl WidthUnit {
    /// Multiplier from this unit to meters
    pub fn meters_per_unit(self) -> f64 {
        match self {
            WidthUnit::Inches => IN_TO_M,
            WidthUnit::Millimeters => MM_TO_M,
            WidthUnit::Centimeters => CM_TO_M,
            WidthUnit::Meters => 1.0,
        }
    }

    /// Normalize a value in this unit to meters
    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

impl fmt::Display for WidthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            WidthUnit::Inches => "in",
            WidthUnit::Millimeters => "mm",
            WidthUnit::Centimeters => "cm",
            WidthUnit::Meters => "m",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for WidthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(WidthUnit::Inches),
            "mm" => Ok(WidthUnit::Millimeters),
            "cm" => Ok(WidthUnit::Centimeters),
            "m" => Ok(WidthUnit::Meters),
            other => Err(format!("unknown width unit: {}", other)),
        }
    }
}

// ============================================================================
// Volume Units (base: milliliters)
// ============================================================================

/// Resin volume units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Gallons,
    Quarts,
    Liters,
    FluidOunces,
}

impl VolumeUnit {
    /// Multiplier from this unit to milliliters
    pub fn milliliters_per_unit(self) -> f64 {
        match self {
            VolumeUnit::Gallons => GAL_TO_ML,
            VolumeUnit::Quarts => QT_TO_ML,
            VolumeUnit::Liters => L_TO_ML,
            VolumeUnit::FluidOunces => FLOZ_TO_ML,
        }
    }

    /// Normalize a value in this unit to milliliters
    pub fn to_milliliters(self, value: f64) -> f64 {
        value * self.milliliters_per_unit()
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            VolumeUnit::Gallons => "gal",
            VolumeUnit::Quarts => "qt",
            VolumeUnit::Liters => "L",
            VolumeUnit::FluidOunces => "fl oz",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for VolumeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gal" => Ok(VolumeUnit::Gallons),
            "qt" => Ok(VolumeUnit::Quarts),
            "l" => Ok(VolumeUnit::Liters),
            "fl oz" | "fl_oz" | "floz" | "oz" => Ok(VolumeUnit::FluidOunces),
            other => Err(format!("unknown volume unit: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_to_grams() {
        assert_eq!(MassUnit::Kilograms.to_grams(25.0), 25_000.0);
        assert!((MassUnit::Pounds.to_grams(1.0) - 453.59237).abs() < 1e-12);
    }

    #[test]
    fn test_width_to_meters() {
        assert!((WidthUnit::Inches.to_meters(50.0) - 1.27).abs() < 1e-12);
        assert!((WidthUnit::Millimeters.to_meters(1270.0) - 1.27).abs() < 1e-12);
        assert!((WidthUnit::Centimeters.to_meters(127.0) - 1.27).abs() < 1e-12);
        assert_eq!(WidthUnit::Meters.to_meters(1.27), 1.27);
    }

    #[test]
    fn test_volume_to_milliliters() {
        assert!((VolumeUnit::Gallons.to_milliliters(1.0) - 3785.411784).abs() < 1e-9);
        assert!((VolumeUnit::Quarts.to_milliliters(4.0) - 3785.411784).abs() < 1e-9);
        assert_eq!(VolumeUnit::Liters.to_milliliters(2.5), 2500.0);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<MassUnit>().unwrap(), MassUnit::Kilograms);
        assert_eq!(" LB ".parse::<MassUnit>().unwrap(), MassUnit::Pounds);
        assert_eq!("mm".parse::<WidthUnit>().unwrap(), WidthUnit::Millimeters);
        assert_eq!("fl oz".parse::<VolumeUnit>().unwrap(), VolumeUnit::FluidOunces);
        assert!("furlong".parse::<WidthUnit>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for unit in [MassUnit::Kilograms, MassUnit::Pounds] {
            assert_eq!(unit.to_string().parse::<MassUnit>().unwrap(), unit);
        }
        for unit in [
            WidthUnit::Inches,
            WidthUnit::Millimeters,
            WidthUnit::Centimeters,
            WidthUnit::Meters,
        ] {
            assert_eq!(unit.to_string().parse::<WidthUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&VolumeUnit::FluidOunces).unwrap();
        assert_eq!(json, "\"fluid_ounces\"");
        let roundtrip: VolumeUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, VolumeUnit::FluidOunces);
    }
}
