//! # Error Types
//!
//! Structured error types for divider_core. Every failure path of a
//! calculation is classified into one of these variants so the boundary
//! (form, CLI, JSON consumer) can show the failure kind plus a short
//! description without ever seeing a panic.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::errors::{DividerError, CalcResult};
//!
//! fn require_nonzero(total_ohms: f64) -> CalcResult<f64> {
//!     if total_ohms == 0.0 {
//!         return Err(DividerError::ZeroTotalResistance);
//!     }
//!     Ok(total_ohms)
//! }
//!
//! assert_eq!(require_nonzero(0.0).unwrap_err().error_code(), "ZERO_TOTAL_RESISTANCE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for divider_core operations
pub type CalcResult<T> = Result<T, DividerError>;

/// Structured error type for divider calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DividerError {
    /// A required field is empty, or a field is not a finite real number
    #[error("Invalid input for '{field}': '{value}' - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// More than one field of the two-terminal solver was left blank
    #[error("Insufficient input: leave only one field blank (blank: {})", .blank_fields.join(", "))]
    InsufficientInput { blank_fields: Vec<String> },

    /// The series resistance of the three-resistor divider is exactly zero
    #[error("Total resistance cannot be zero")]
    ZeroTotalResistance,

    /// A denominator of the selected two-terminal equation is exactly zero
    #[error("Division by zero: {denominator} evaluates to zero")]
    DivisionByZero { denominator: String },

    /// A unit tag outside {base, kilo, mega}
    #[error("Invalid unit '{tag}': expected one of Ω, kΩ, MΩ")]
    InvalidUnit { tag: String },

    /// A form field name that does not exist for the selected divider
    #[error("Unknown field: {field}")]
    UnknownField { field: String },
}

/// Failure kinds surfaced at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    InsufficientInput,
    ZeroTotalResistance,
    DivisionByZero,
    InvalidUnit,
}

impl DividerError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DividerError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InsufficientInput error from the names of the blank fields
    pub fn insufficient_input<S: Into<String>>(blank_fields: impl IntoIterator<Item = S>) -> Self {
        DividerError::InsufficientInput {
            blank_fields: blank_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(denominator: impl Into<String>) -> Self {
        DividerError::DivisionByZero {
            denominator: denominator.into(),
        }
    }

    /// Create an InvalidUnit error
    pub fn invalid_unit(tag: impl Into<String>) -> Self {
        DividerError::InvalidUnit { tag: tag.into() }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        DividerError::UnknownField { field: field.into() }
    }

    /// Classify into the boundary failure kind.
    ///
    /// An unknown field name is a malformed request, so it reports as
    /// invalid input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DividerError::InvalidInput { .. } | DividerError::UnknownField { .. } => ErrorKind::InvalidInput,
            DividerError::InsufficientInput { .. } => ErrorKind::InsufficientInput,
            DividerError::ZeroTotalResistance => ErrorKind::ZeroTotalResistance,
            DividerError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            DividerError::InvalidUnit { .. } => ErrorKind::InvalidUnit,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DividerError::InvalidInput { .. } => "INVALID_INPUT",
            DividerError::InsufficientInput { .. } => "INSUFFICIENT_INPUT",
            DividerError::ZeroTotalResistance => "ZERO_TOTAL_RESISTANCE",
            DividerError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            DividerError::InvalidUnit { .. } => "INVALID_UNIT",
            DividerError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DividerError::invalid_input("r1", "abc", "not a number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DividerError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serializes_with_tag() {
        let json = serde_json::to_value(DividerError::ZeroTotalResistance).unwrap();
        assert_eq!(json["type"], "ZeroTotalResistance");
    }

    #[test]
    fn test_insufficient_input_message() {
        let error = DividerError::insufficient_input(["vs", "r1"]);
        let message = error.to_string();
        assert!(message.contains("leave only one field blank"));
        assert!(message.contains("vs, r1"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DividerError::division_by_zero("R2").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(DividerError::invalid_unit("mΩ").error_code(), "INVALID_UNIT");
        assert_eq!(DividerError::unknown_field("r9").kind(), ErrorKind::InvalidInput);
    }
}
