//! # Areal-Weight Source Resolver
//!
//! State machine for the bidirectional textile pane. The three areal-weight
//! representations (gsm, oz/yd², oz/ft²) are mutually derivable, so storing
//! all three invites drift. Instead the pane records exactly one raw user
//! entry tagged with which field it belongs to; the other two values are
//! always recomputed from it and never stored.
//!
//! Editing any field moves the tag to that field. There is no terminal state;
//! the pane lives for the whole session.
//!
//! ## Example
//!
//! ```rust
//! use fab_core::resolver::{ArealField, ArealPane};
//!
//! let mut pane = ArealPane::new(); // defaults to 200 gsm
//! let weights = pane.derived().unwrap();
//! assert!((weights.oz_per_yd2 - 5.8987).abs() < 1e-4);
//!
//! // User types into the oz/yd² field; it becomes the source of truth
//! pane.edit(ArealField::OzPerYd2, "6");
//! let weights = pane.derived().unwrap();
//! assert!((weights.gsm - 203.434485).abs() < 1e-5);
//!
//! // Garbage input means nothing to display, not zero
//! pane.edit(ArealField::Gsm, "abc");
//! assert!(pane.derived().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::conversions::areal::{
    gsm_to_oz_per_ft2, gsm_to_oz_per_yd2, oz_per_ft2_to_gsm, oz_per_yd2_to_gsm,
};
use crate::parse::parse_positive;

/// Default gsm shown before the user has typed anything
const DEFAULT_GSM: &str = "200";

/// Which of the three equivalent fields currently holds the user's entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArealField {
    #[default]
    Gsm,
    OzPerYd2,
    OzPerFt2,
}

/// The bidirectional areal-weight pane.
///
/// Holds the one live raw string and its field tag. Everything else is
/// derived on demand through [`derived`](ArealPane::derived).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArealPane {
    source: ArealField,
    raw: String,
}

/// The three mutually consistent representations, computed from the pane's
/// current source value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArealWeights {
    pub gsm: f64,
    pub oz_per_yd2: f64,
    pub oz_per_ft2: f64,
}

impl ArealPane {
    /// New pane with the default 200 gsm entry.
    pub fn new() -> Self {
        ArealPane {
            source: ArealField::Gsm,
            raw: DEFAULT_GSM.to_string(),
        }
    }

    /// Record an edit to one of the three fields. That field becomes the
    /// authoritative source; the previous entry is discarded.
    pub fn edit(&mut self, field: ArealField, raw: impl Into<String>) {
        self.source = field;
        self.raw = raw.into();
    }

    /// The field currently holding the user's entry.
    pub fn source(&self) -> ArealField {
        self.source
    }

    /// The live raw string as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Derive all three representations from the current entry.
    ///
    /// Returns `None` when the raw entry does not parse to a positive finite
    /// number. A pure function of the pane state: calling it repeatedly
    /// without an intervening [`edit`](ArealPane::edit) yields bit-identical
    /// results.
    pub fn derived(&self) -> Option<ArealWeights> {
        let value = parse_positive(&self.raw)?;

        let gsm = match self.source {
            ArealField::Gsm => value,
            ArealField::OzPerYd2 => oz_per_yd2_to_gsm(value),
            ArealField::OzPerFt2 => oz_per_ft2_to_gsm(value),
        };

        // The source value passes through untouched so the user never sees
        // their own entry rewritten by a round trip.
        let mut weights = ArealWeights {
            gsm,
            oz_per_yd2: gsm_to_oz_per_yd2(gsm),
            oz_per_ft2: gsm_to_oz_per_ft2(gsm),
        };
        match self.source {
            ArealField::Gsm => weights.gsm = value,
            ArealField::OzPerYd2 => weights.oz_per_yd2 = value,
            ArealField::OzPerFt2 => weights.oz_per_ft2 = value,
        }

        Some(weights)
    }
}

impl Default for ArealPane {
    fn default() -> Self {
        ArealPane::new()
    }
}
