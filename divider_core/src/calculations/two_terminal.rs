//! # Two-Resistor Divider Solver
//!
//! Solves `Vout = Vs × R2 / (R1 + R2)` for whichever of the four quantities
//! is left blank. When nothing is blank, Vout is recomputed from Vs, R1 and
//! R2 and the previous Vout text is discarded.
//!
//! ## Evaluation Order
//!
//! 1. Count blank fields. Two or more blanks is `InsufficientInput`,
//!    reported before any field is parsed.
//! 2. Parse the non-blank fields in the order Vs, R1, R2, Vout.
//! 3. Pick the unknown with [`SolveFor::detect`] and evaluate its formula,
//!    rejecting an exactly-zero denominator with `DivisionByZero`.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::calculations::two_terminal::{calculate, SolveFor, TwoTerminalInput};
//! use divider_core::measurement::ResistorEntry;
//! use divider_core::units::UnitScale;
//!
//! let input = TwoTerminalInput {
//!     vs: "10".to_string(),
//!     r1: ResistorEntry::new("100", UnitScale::Base),
//!     r2: ResistorEntry::new("", UnitScale::Base),
//!     vout: "5".to_string(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.solved_for, SolveFor::R2);
//! assert_eq!(result.formatted(2), "100.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::divider::{bottom_resistance, output_voltage, source_voltage, top_resistance};
use crate::errors::{CalcResult, DividerError};
use crate::format::format_rounded;
use crate::measurement::{is_blank, parse_field, ResistorEntry};
use crate::units::{Ohms, UnitScale};

/// Input snapshot for the two-resistor divider. Blank text means "unknown".
///
/// ## JSON Example
///
/// ```json
/// {
///   "vs": "10",
///   "r1": { "text": "100", "unit": "base" },
///   "r2": { "text": "100", "unit": "base" },
///   "vout": ""
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TwoTerminalInput {
    /// Source voltage text, in volts
    #[serde(default)]
    pub vs: String,

    /// Top resistor
    #[serde(default)]
    pub r1: ResistorEntry,

    /// Bottom resistor
    #[serde(default)]
    pub r2: ResistorEntry,

    /// Output voltage text (across R2), in volts
    #[serde(default)]
    pub vout: String,
}

impl TwoTerminalInput {
    /// Names of the blank fields, in evaluation order
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("vs", is_blank(&self.vs)),
            ("r1", self.r1.is_blank()),
            ("r2", self.r2.is_blank()),
            ("vout", is_blank(&self.vout)),
        ]
        .into_iter()
        .filter_map(|(name, blank)| blank.then_some(name))
        .collect()
    }
}

/// Which quantity the solver computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveFor {
    /// Vs was blank
    SourceVoltage,
    /// R1 was blank
    R1,
    /// R2 was blank
    R2,
    /// Vout was blank
    OutputVoltage,
    /// Nothing was blank; Vout is recomputed and overwritten
    Refresh,
}

impl SolveFor {
    /// Determine the unknown from the input snapshot.
    ///
    /// Fails with `InsufficientInput` when more than one field is blank.
    /// The check order Vs, R1, R2, Vout decides the branch.
    pub fn detect(input: &TwoTerminalInput) -> CalcResult<SolveFor> {
        let blanks = input.blank_fields();
        if blanks.len() > 1 {
            return Err(DividerError::insufficient_input(blanks));
        }

        Ok(match blanks.first().copied() {
            Some("vs") => SolveFor::SourceVoltage,
            Some("r1") => SolveFor::R1,
            Some("r2") => SolveFor::R2,
            Some(_) => SolveFor::OutputVoltage,
            None => SolveFor::Refresh,
        })
    }

    /// Name of the field that receives the computed value
    pub fn field(self) -> &'static str {
        match self {
            SolveFor::SourceVoltage => "vs",
            SolveFor::R1 => "r1",
            SolveFor::R2 => "r2",
            SolveFor::OutputVoltage | SolveFor::Refresh => "vout",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SolveFor::SourceVoltage => "Voltage Source (Vs)",
            SolveFor::R1 => "Resistance 1 (R1)",
            SolveFor::R2 => "Resistance 2 (R2)",
            SolveFor::OutputVoltage => "Output Voltage (Vout)",
            SolveFor::Refresh => "Output Voltage (Vout, recomputed)",
        }
    }
}

/// Outcome of the two-resistor solver.
///
/// `value` is in base units (volts or ohms). `display_value` is the same
/// quantity expressed in the unit selected for the solved field, which is
/// what gets written back.
///
/// ## JSON Example
///
/// ```json
/// {
///   "solved_for": "R2",
///   "value": 100.0,
///   "display_value": 100.0,
///   "unit": "base",
///   "source_voltage_volts": 10.0,
///   "r1_ohms": 100.0,
///   "r2_ohms": 100.0,
///   "output_voltage_volts": 5.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoTerminalResult {
    pub solved_for: SolveFor,

    /// Computed value in base units
    pub value: f64,

    /// Computed value in the solved field's unit
    pub display_value: f64,

    /// Unit of the solved field (resistances only)
    pub unit: Option<UnitScale>,

    pub source_voltage_volts: f64,
    pub r1_ohms: f64,
    pub r2_ohms: f64,
    pub output_voltage_volts: f64,
}

impl TwoTerminalResult {
    /// Text written back into the solved field
    pub fn formatted(&self, decimals: usize) -> String {
        format_rounded(self.display_value, decimals)
    }
}

/// Solve the divider for its blank field.
///
/// # Returns
///
/// * `Ok(TwoTerminalResult)` - The solved quantity and the full divider
/// * `Err(InsufficientInput)` - Two or more fields blank
/// * `Err(InvalidInput)` - A non-blank field is not a number
/// * `Err(DivisionByZero)` - The selected formula's denominator is zero
pub fn calculate(input: &TwoTerminalInput) -> CalcResult<TwoTerminalResult> {
    let solve_for = SolveFor::detect(input)?;

    let vs = parse_field("vs", &input.vs)?;
    let r1 = input.r1.measure("r1")?.base_value();
    let r2 = input.r2.measure("r2")?.base_value();
    let vout = parse_field("vout", &input.vout)?;

    let (vs, r1, r2, vout) = match solve_for {
        SolveFor::SourceVoltage => {
            let (r1, r2, vout) = (known(r1, "r1")?, known(r2, "r2")?, known(vout, "vout")?);
            nonzero(r2, "R2")?;
            (source_voltage(vout, r1, r2), r1, r2, vout)
        }
        SolveFor::R1 => {
            let (vs, r2, vout) = (known(vs, "vs")?, known(r2, "r2")?, known(vout, "vout")?);
            nonzero(vout, "Vout")?;
            (vs, top_resistance(vs, r2, vout), r2, vout)
        }
        SolveFor::R2 => {
            let (vs, r1, vout) = (known(vs, "vs")?, known(r1, "r1")?, known(vout, "vout")?);
            nonzero(vs - vout, "Vs - Vout")?;
            (vs, r1, bottom_resistance(vs, r1, vout), vout)
        }
        SolveFor::OutputVoltage | SolveFor::Refresh => {
            let (vs, r1, r2) = (known(vs, "vs")?, known(r1, "r1")?, known(r2, "r2")?);
            nonzero(r1 + r2, "R1 + R2")?;
            (vs, r1, r2, output_voltage(vs, r1, r2))
        }
    };

    let (value, unit) = match solve_for {
        SolveFor::SourceVoltage => (vs, None),
        SolveFor::R1 => (r1, Some(input.r1.unit)),
        SolveFor::R2 => (r2, Some(input.r2.unit)),
        SolveFor::OutputVoltage | SolveFor::Refresh => (vout, None),
    };
    let display_value = unit.map_or(value, |u| Ohms(value).in_scale(u));

    tracing::debug!(?solve_for, value, vs, r1, r2, vout, "two-terminal divider solved");

    Ok(TwoTerminalResult {
        solved_for: solve_for,
        value,
        display_value,
        unit,
        source_voltage_volts: vs,
        r1_ohms: r1,
        r2_ohms: r2,
        output_voltage_volts: vout,
    })
}

fn known(value: Option<f64>, field: &str) -> CalcResult<f64> {
    value.ok_or_else(|| DividerError::invalid_input(field, "", "A value is required"))
}

fn nonzero(denominator: f64, label: &str) -> CalcResult<()> {
    if denominator == 0.0 {
        return Err(DividerError::division_by_zero(label));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn input(vs: &str, r1: &str, r2: &str, vout: &str) -> TwoTerminalInput {
        TwoTerminalInput {
            vs: vs.to_string(),
            r1: ResistorEntry::new(r1, UnitScale::Base),
            r2: ResistorEntry::new(r2, UnitScale::Base),
            vout: vout.to_string(),
        }
    }

    #[test]
    fn test_detect_order() {
        assert_eq!(SolveFor::detect(&input("", "1", "1", "1")).unwrap(), SolveFor::SourceVoltage);
        assert_eq!(SolveFor::detect(&input("1", " ", "1", "1")).unwrap(), SolveFor::R1);
        assert_eq!(SolveFor::detect(&input("1", "1", "", "1")).unwrap(), SolveFor::R2);
        assert_eq!(SolveFor::detect(&input("1", "1", "1", "")).unwrap(), SolveFor::OutputVoltage);
        assert_eq!(SolveFor::detect(&input("1", "1", "1", "1")).unwrap(), SolveFor::Refresh);
    }

    #[test]
    fn test_result_records_detected_branch() {
        let cases = [
            (input("", "100", "100", "5"), SolveFor::SourceVoltage),
            (input("10", "", "100", "5"), SolveFor::R1),
            (input("10", "100", "", "5"), SolveFor::R2),
            (input("10", "100", "100", ""), SolveFor::OutputVoltage),
            (input("10", "100", "100", "5"), SolveFor::Refresh),
        ];
        for (input, expected) in cases {
            assert_eq!(SolveFor::detect(&input).unwrap(), expected);
            assert_eq!(calculate(&input).unwrap().solved_for, expected);
        }
    }

    #[test]
    fn test_scaled_resistance_overflow_is_invalid_input() {
        let input = TwoTerminalInput {
            vs: "10".to_string(),
            r1: ResistorEntry::new("1e308", UnitScale::Mega),
            r2: ResistorEntry::new("100", UnitScale::Base),
            vout: String::new(),
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, DividerError::InvalidInput { ref field, .. } if field == "r1"));
    }

    #[test]
    fn test_solve_output_voltage() {
        let result = calculate(&input("10", "100", "100", "")).unwrap();
        assert_eq!(result.solved_for, SolveFor::OutputVoltage);
        assert_eq!(result.value, 5.0);
        assert_eq!(result.formatted(2), "5.00");
    }

    #[test]
    fn test_solve_bottom_resistor() {
        let result = calculate(&input("10", "100", "", "5")).unwrap();
        assert_eq!(result.solved_for, SolveFor::R2);
        assert_eq!(result.r2_ohms, 100.0);
        assert_eq!(result.formatted(2), "100.00");
    }

    #[test]
    fn test_solve_source_voltage() {
        let result = calculate(&input("", "300", "100", "2.5")).unwrap();
        assert_eq!(result.solved_for, SolveFor::SourceVoltage);
        assert_eq!(result.formatted(2), "10.00");
    }

    #[test]
    fn test_solve_top_resistor_keeps_unit() {
        let input = TwoTerminalInput {
            vs: "12".to_string(),
            r1: ResistorEntry::new("", UnitScale::Kilo),
            r2: ResistorEntry::new("10", UnitScale::Kilo),
            vout: "3".to_string(),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.solved_for, SolveFor::R1);
        assert_eq!(result.unit, Some(UnitScale::Kilo));
        assert!((result.r1_ohms - 30_000.0).abs() < 1e-9);
        assert_eq!(result.formatted(2), "30.00");
    }

    #[test]
    fn test_two_blanks_is_insufficient() {
        let err = calculate(&input("", "", "100", "5")).unwrap_err();
        assert_eq!(err, DividerError::insufficient_input(["vs", "r1"]));
        assert_eq!(err.kind(), ErrorKind::InsufficientInput);
    }

    #[test]
    fn test_blank_count_checked_before_parsing() {
        let err = calculate(&input("", "", "abc", "5")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientInput);
    }

    #[test]
    fn test_non_numeric_field() {
        let err = calculate(&input("10", "1OO", "100", "")).unwrap_err();
        assert!(matches!(err, DividerError::InvalidInput { ref field, .. } if field == "r1"));
    }

    #[test]
    fn test_refresh_ignores_previous_vout() {
        let a = calculate(&input("10", "100", "100", "1")).unwrap();
        let b = calculate(&input("10", "100", "100", "42.5")).unwrap();
        assert_eq!(a.solved_for, SolveFor::Refresh);
        assert_eq!(a, b);
        assert_eq!(a.formatted(2), "5.00");
    }

    #[test]
    fn test_refresh_still_validates_vout() {
        let err = calculate(&input("10", "100", "100", "five")).unwrap_err();
        assert!(matches!(err, DividerError::InvalidInput { ref field, .. } if field == "vout"));
    }

    #[test]
    fn test_division_by_zero_branches() {
        let cases = [
            (input("", "100", "0", "5"), "R2"),
            (input("10", "", "100", "0"), "Vout"),
            (input("5", "100", "", "5"), "Vs - Vout"),
            (input("10", "0", "0", ""), "R1 + R2"),
            (input("10", "0", "0", "3"), "R1 + R2"),
        ];
        for (input, label) in cases {
            assert_eq!(calculate(&input).unwrap_err(), DividerError::division_by_zero(label));
        }
    }

    #[test]
    fn test_serialization() {
        let result = calculate(&input("10", "100", "", "5")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["solved_for"], "R2");
        assert_eq!(json["unit"], "base");
    }
}
