//! # Unit Types
//!
//! Unit handling for divider calculations. Voltages are always entered in
//! volts; resistances carry a scale selected from a closed set
//! (Ω, kΩ, MΩ), mirroring the unit dropdown next to each resistor field.
//!
//! ## Unit Policy
//!
//! Unit tags arriving as text are resolved through [`UnitScale::resolve`].
//! With [`UnitPolicy::Strict`] (the default) an unrecognized tag is an
//! [`InvalidUnit`](crate::errors::DividerError::InvalidUnit) error. With
//! [`UnitPolicy::Lenient`] it falls back to base ohms and logs a warning.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::units::{Ohms, UnitScale};
//!
//! let scale: UnitScale = "kΩ".parse().unwrap();
//! assert_eq!(scale.multiplier(), 1e3);
//!
//! let r = Ohms::from_scaled(4.7, scale);
//! assert_eq!(r.0, 4700.0);
//! assert_eq!(r.in_scale(UnitScale::Kilo), 4.7);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, DividerError};

// ============================================================================
// Unit Scale
// ============================================================================

/// Scale factor applied to a resistance magnitude.
///
/// Serializes as `"base"`, `"kilo"` or `"mega"`. Deserializing goes through
/// [`FromStr`], so symbols like `"kΩ"` are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnitScale {
    /// Ohms (×1)
    #[default]
    Base,
    /// Kilohms (×1e3)
    Kilo,
    /// Megohms (×1e6)
    Mega,
}

impl UnitScale {
    /// All selectable scales, in dropdown order
    pub const ALL: [UnitScale; 3] = [UnitScale::Base, UnitScale::Kilo, UnitScale::Mega];

    /// Multiplier that converts a magnitude in this scale to base units
    pub fn multiplier(self) -> f64 {
        match self {
            UnitScale::Base => 1.0,
            UnitScale::Kilo => 1e3,
            UnitScale::Mega => 1e6,
        }
    }

    /// Resistance symbol shown next to the field
    pub fn symbol(self) -> &'static str {
        match self {
            UnitScale::Base => "Ω",
            UnitScale::Kilo => "kΩ",
            UnitScale::Mega => "MΩ",
        }
    }

    /// Resolve a textual unit tag under the given policy.
    pub fn resolve(tag: &str, policy: UnitPolicy) -> CalcResult<UnitScale> {
        match (tag.parse::<UnitScale>(), policy) {
            (Ok(scale), _) => Ok(scale),
            (Err(err), UnitPolicy::Strict) => Err(err),
            (Err(_), UnitPolicy::Lenient) => {
                tracing::warn!(tag, "unrecognized unit tag, falling back to Ω");
                Ok(UnitScale::Base)
            }
        }
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for UnitScale {
    type Err = DividerError;

    /// Parse a unit tag.
    ///
    /// Single-letter prefixes are case-sensitive so that `m` (milli) is
    /// never mistaken for `M` (mega). Spelled-out names are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        match tag {
            "" | "\u{3a9}" | "\u{2126}" => return Ok(UnitScale::Base),
            "k" | "K" | "k\u{3a9}" | "k\u{2126}" => return Ok(UnitScale::Kilo),
            "M" | "M\u{3a9}" | "M\u{2126}" | "Mohm" | "Mohms" => return Ok(UnitScale::Mega),
            _ => {}
        }

        match tag.to_ascii_lowercase().as_str() {
            "base" | "ohm" | "ohms" => Ok(UnitScale::Base),
            "kilo" | "kohm" | "kohms" => Ok(UnitScale::Kilo),
            "mega" | "meg" => Ok(UnitScale::Mega),
            _ => Err(DividerError::invalid_unit(tag)),
        }
    }
}

impl TryFrom<String> for UnitScale {
    type Error = DividerError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// How unrecognized unit tags are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPolicy {
    /// Reject unknown tags with `InvalidUnit`
    #[default]
    Strict,
    /// Treat unknown tags as base ohms
    Lenient,
}

// ============================================================================
// Resistance
// ============================================================================

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

impl Ohms {
    /// Build from a magnitude expressed in `scale`
    pub fn from_scaled(magnitude: f64, scale: UnitScale) -> Self {
        Ohms(magnitude * scale.multiplier())
    }

    /// Express this resistance as a magnitude in `scale`
    pub fn in_scale(self, scale: UnitScale) -> f64 {
        self.0 / scale.multiplier()
    }
}
