//! # Measurements
//!
//! Parsing of raw field text into numeric magnitudes. A field that is empty
//! after trimming is *blank*; anything else must parse as a finite real
//! number.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::measurement::{parse_field, ResistorEntry};
//! use divider_core::units::UnitScale;
//!
//! assert_eq!(parse_field("vs", " 12 ").unwrap(), Some(12.0));
//! assert_eq!(parse_field("vs", "   ").unwrap(), None);
//! assert!(parse_field("vs", "twelve").is_err());
//!
//! let r1 = ResistorEntry::new("4.7", UnitScale::Kilo).measure("r1").unwrap();
//! assert_eq!(r1.base_value(), Some(4700.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, DividerError};
use crate::units::{Ohms, UnitPolicy, UnitScale};

/// Whether a raw field counts as blank ("solve for this").
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parse a field that may be left blank.
///
/// Returns `Ok(None)` for blank text and `InvalidInput` for text that is not
/// a finite real number. `inf` and `NaN` are rejected.
pub fn parse_field(field: &str, raw: &str) -> CalcResult<Option<f64>> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| DividerError::invalid_input(field, text, "Please enter a valid numeric value"))?;

    if !value.is_finite() {
        return Err(DividerError::invalid_input(field, text, "Value must be a finite number"));
    }

    Ok(Some(value))
}

/// Parse a field that must be filled in.
pub fn parse_required(field: &str, raw: &str) -> CalcResult<f64> {
    parse_field(field, raw)?
        .ok_or_else(|| DividerError::invalid_input(field, raw.trim(), "A value is required"))
}

/// Raw contents of a resistor field plus its unit selector.
///
/// ## JSON Example
///
/// ```json
/// { "text": "4.7", "unit": "kilo" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResistorEntry {
    /// Text as typed by the user
    #[serde(default)]
    pub text: String,

    /// Selected scale for this resistor
    #[serde(default)]
    pub unit: UnitScale,
}

impl ResistorEntry {
    pub fn new(text: impl Into<String>, unit: UnitScale) -> Self {
        ResistorEntry {
            text: text.into(),
            unit,
        }
    }

    /// Build from a number instead of typed text
    pub fn ohms(magnitude: f64, unit: UnitScale) -> Self {
        ResistorEntry::new(magnitude.to_string(), unit)
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }

    /// Parse into a [`Measurement`], keeping the unit.
    ///
    /// A magnitude that overflows once the unit multiplier is applied is
    /// `InvalidInput`, same as non-finite text.
    pub fn measure(&self, field: &str) -> CalcResult<Measurement> {
        let measurement = Measurement {
            magnitude: parse_field(field, &self.text)?,
            unit: self.unit,
        };
        if measurement.base_value().is_some_and(|v| !v.is_finite()) {
            return Err(DividerError::invalid_input(
                field,
                self.text.trim(),
                format!("Value is out of range in {}", self.unit),
            ));
        }
        Ok(measurement)
    }

    /// Resistance in ohms for a field that must be filled in.
    pub fn required_ohms(&self, field: &str) -> CalcResult<f64> {
        self.measure(field)?
            .base_value()
            .ok_or_else(|| DividerError::invalid_input(field, self.text.trim(), "A value is required"))
    }
}

/// A resistor field read from a document, with its unit still a raw tag.
///
/// Tags are resolved with [`UnitScale::resolve`], so anything the CLI flags
/// accept (`"kΩ"`, `"k"`, `"kilo"`) works here too.
///
/// ## JSON Example
///
/// ```json
/// { "text": "4.7", "unit": "kΩ" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawResistorEntry {
    #[serde(default)]
    pub text: String,

    /// Unit tag; empty means Ω
    #[serde(default)]
    pub unit: String,
}

impl RawResistorEntry {
    pub fn resolve(&self, policy: UnitPolicy) -> CalcResult<ResistorEntry> {
        Ok(ResistorEntry::new(self.text.clone(), UnitScale::resolve(&self.unit, policy)?))
    }
}

/// A parsed field: an optional magnitude with its unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub magnitude: Option<f64>,
    pub unit: UnitScale,
}

impl Measurement {
    /// Value after applying the unit multiplier
    pub fn base_value(&self) -> Option<f64> {
        self.magnitude.map(|m| Ohms::from_scaled(m, self.unit).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank("0"));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_field("r1", "1e3").unwrap(), Some(1000.0));
        assert_eq!(parse_field("r1", "-2.5").unwrap(), Some(-2.5));
        assert_eq!(parse_field("r1", "").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_field("vin", "5V").unwrap_err();
        match err {
            DividerError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "vin");
                assert_eq!(value, "5V");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_field("vin", "inf").is_err());
        assert!(parse_field("vin", "NaN").is_err());
    }

    #[test]
    fn test_required_field() {
        assert!(parse_required("r3", " ").is_err());
        assert_eq!(parse_required("r3", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_measurement_scaling() {
        let m = ResistorEntry::new("1", UnitScale::Mega).measure("r3").unwrap();
        assert_eq!(m.base_value(), Some(1e6));

        let blank = ResistorEntry::new("", UnitScale::Kilo).measure("r1").unwrap();
        assert_eq!(blank.base_value(), None);
    }

    #[test]
    fn test_overflow_after_scaling() {
        let err = ResistorEntry::new("1e308", UnitScale::Mega).measure("r1").unwrap_err();
        match err {
            DividerError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "r1");
                assert_eq!(value, "1e308");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(ResistorEntry::new("1e308", UnitScale::Base).measure("r1").is_ok());
    }

    #[test]
    fn test_required_ohms() {
        assert_eq!(ResistorEntry::new("2.2", UnitScale::Kilo).required_ohms("r2").unwrap(), 2200.0);
        assert!(ResistorEntry::new("", UnitScale::Kilo).required_ohms("r2").is_err());
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let entry: ResistorEntry = serde_json::from_str(r#"{ "text": "10" }"#).unwrap();
        assert_eq!(entry.unit, UnitScale::Base);
    }

    #[test]
    fn test_entry_accepts_unit_symbols() {
        let entry: ResistorEntry = serde_json::from_str(r#"{ "text": "10", "unit": "kΩ" }"#).unwrap();
        assert_eq!(entry.unit, UnitScale::Kilo);
        assert!(serde_json::from_str::<ResistorEntry>(r#"{ "text": "10", "unit": "GΩ" }"#).is_err());
    }

    #[test]
    fn test_raw_entry_resolves_under_policy() {
        let raw: RawResistorEntry = serde_json::from_str(r#"{ "text": "4.7", "unit": "kΩ" }"#).unwrap();
        assert_eq!(raw.resolve(UnitPolicy::Strict).unwrap(), ResistorEntry::new("4.7", UnitScale::Kilo));

        let unknown = RawResistorEntry {
            text: "4.7".to_string(),
            unit: "GΩ".to_string(),
        };
        assert_eq!(unknown.resolve(UnitPolicy::Strict).unwrap_err(), DividerError::invalid_unit("GΩ"));
        assert_eq!(unknown.resolve(UnitPolicy::Lenient).unwrap().unit, UnitScale::Base);
    }
}
