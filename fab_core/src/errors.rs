//! # Error Types
//!
//! Structured error types for fab_core. The engine has a deliberately small
//! error surface: the only thing that can go wrong is being handed a value
//! outside a quantity's domain, and presentations are expected to filter raw
//! text through [`crate::parse`] before the engine ever sees it.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::errors::{ConvError, ConvResult};
//!
//! fn validate_gsm(gsm: f64) -> ConvResult<()> {
//!     if !gsm.is_finite() || gsm <= 0.0 {
//!         return Err(ConvError::invalid_input(
//!             "areal_weight_gsm",
//!             gsm.to_string(),
//!             "Areal weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fab_core operations
pub type ConvResult<T> = Result<T, ConvError>;

/// Structured error type for conversion operations.
///
/// A single taxonomy covers the whole engine: every failure is an invalid
/// input detected before arithmetic runs. Nothing fails mid-calculation and
/// nothing is retried.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvError {
    /// An input value is invalid (empty, non-numeric, non-finite, or
    /// non-positive where a positive quantity is required)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConvError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }

    /// The name of the field that was rejected
    pub fn field(&self) -> &str {
        match self {
            ConvError::InvalidInput { field, .. } => field,
        }
    }
}
