//! # fab_core - Composite Fabrication Conversion Engine
//!
//! `fab_core` is the computational heart of the Fabshop Converter, providing
//! the unit conversions a composites shop reaches for daily: textile areal
//! weight, roll length from roll weight, and catalyst dosing volumes. All
//! inputs and outputs are JSON-serializable, making the engine easy to embed
//! behind any front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Base-Unit Routing**: Every family converts input → base unit → output,
//!   never unit-to-unit directly
//! - **No Surprises**: Invalid input is filtered at the text boundary; the
//!   engine never panics and never hands back NaN or infinity
//!
//! ## Quick Start
//!
//! ```rust
//! use fab_core::conversions::catalyst::{calculate, CatalystInput};
//! use fab_core::units::VolumeUnit;
//!
//! let input = CatalystInput {
//!     percent: 1.5,
//!     resin_volume: 1.0,
//!     resin_unit: VolumeUnit::Gallons,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.catalyst_ml - 56.781177).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`conversions`] - The three conversion families (areal, roll, catalyst)
//! - [`resolver`] - Single-source state machine for the bidirectional areal pane
//! - [`units`] - Closed unit enumerations and conversion factors
//! - [`parse`] - The raw-text → engine input boundary
//! - [`format`] - Display formatting (round, then strip trailing zeros)
//! - [`errors`] - Structured error types

pub mod conversions;
pub mod errors;
pub mod format;
pub mod parse;
pub mod resolver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{ConvError, ConvResult};
pub use resolver::{ArealField, ArealPane, ArealWeights};
pub use units::{MassUnit, VolumeUnit, WidthUnit};
