//! # Conversion Families
//!
//! This module contains the three conversion families. Each stateful-input
//! family follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Derived quantities (JSON-serializable)
//! - `calculate(input) -> Result<*Result, ConvError>` - Pure calculation function
//!
//! The areal-weight family is simpler still: paired pure functions with no
//! input struct, since each takes exactly one number.
//!
//! ## Available Conversions
//!
//! - [`areal`] - Textile areal weight (gsm ⇄ oz/yd² ⇄ oz/ft²)
//! - [`roll`] - Roll length from areal weight, roll weight, and width
//! - [`catalyst`] - Catalyst dosing volumes and normalized rates

pub mod areal;
pub mod catalyst;
pub mod roll;

// Re-export commonly used types
pub use catalyst::{CatalystInput, CatalystResult};
pub use roll::{RollInput, RollResult};
