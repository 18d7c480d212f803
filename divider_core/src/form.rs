//! # Headless Form State
//!
//! Field-level state for the two calculator forms, independent of any
//! widget toolkit. A presentation layer binds its text boxes and unit
//! dropdowns to these structs and wires its buttons to
//! [`calculate`](TwoTerminalForm::calculate) and
//! [`clear`](TwoTerminalForm::clear).
//!
//! `calculate` takes a snapshot of the fields, runs the pure solver, and
//! writes the formatted result back only on success. On error every field is
//! left as it was.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::form::TwoTerminalForm;
//! use divider_core::settings::SolverSettings;
//!
//! let mut form = TwoTerminalForm::default();
//! form.vs = "10".to_string();
//! form.r1 = "100".to_string();
//! form.r2 = "100".to_string();
//!
//! form.calculate(&SolverSettings::default()).unwrap();
//! assert_eq!(form.vout, "5.00");
//!
//! form.clear();
//! assert!(form.vout.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::three_resistor::{self, ThreeResistorInput, ThreeResistorResult};
use crate::calculations::two_terminal::{self, SolveFor, TwoTerminalInput, TwoTerminalResult};
use crate::errors::{CalcResult, DividerError};
use crate::measurement::ResistorEntry;
use crate::settings::SolverSettings;
use crate::units::{UnitPolicy, UnitScale};

// ============================================================================
// Three-Resistor Form
// ============================================================================

/// Form for the three-resistor calculator. `v_r1`..`v_r3` are read-only
/// outputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThreeResistorForm {
    pub vin: String,
    pub r1: String,
    pub r1_unit: UnitScale,
    pub r2: String,
    pub r2_unit: UnitScale,
    pub r3: String,
    pub r3_unit: UnitScale,
    pub v_r1: String,
    pub v_r2: String,
    pub v_r3: String,
}

impl ThreeResistorForm {
    /// Names accepted by [`set_field`](Self::set_field)
    pub const INPUT_FIELDS: [&'static str; 4] = ["vin", "r1", "r2", "r3"];

    /// Names accepted by [`set_unit`](Self::set_unit)
    pub const UNIT_FIELDS: [&'static str; 3] = ["r1", "r2", "r3"];

    /// Immutable copy of the input fields
    pub fn snapshot(&self) -> ThreeResistorInput {
        ThreeResistorInput {
            vin: self.vin.clone(),
            r1: ResistorEntry::new(self.r1.clone(), self.r1_unit),
            r2: ResistorEntry::new(self.r2.clone(), self.r2_unit),
            r3: ResistorEntry::new(self.r3.clone(), self.r3_unit),
        }
    }

    /// Solve and fill the three output fields.
    pub fn calculate(&mut self, settings: &SolverSettings) -> CalcResult<ThreeResistorResult> {
        let result = three_resistor::calculate(&self.snapshot())?;
        let [v1, v2, v3] = result.formatted(settings.three_resistor_decimals);
        self.v_r1 = v1;
        self.v_r2 = v2;
        self.v_r3 = v3;
        Ok(result)
    }

    /// Empty every field, outputs included, and reset units to Ω.
    pub fn clear(&mut self) {
        *self = ThreeResistorForm::default();
    }

    pub fn set_field(&mut self, field: &str, text: impl Into<String>) -> CalcResult<()> {
        let slot = match field {
            "vin" => &mut self.vin,
            "r1" => &mut self.r1,
            "r2" => &mut self.r2,
            "r3" => &mut self.r3,
            _ => return Err(DividerError::unknown_field(field)),
        };
        *slot = text.into();
        Ok(())
    }

    pub fn set_unit(&mut self, field: &str, tag: &str, policy: UnitPolicy) -> CalcResult<UnitScale> {
        let slot = match field {
            "r1" => &mut self.r1_unit,
            "r2" => &mut self.r2_unit,
            "r3" => &mut self.r3_unit,
            _ => return Err(DividerError::unknown_field(field)),
        };
        *slot = UnitScale::resolve(tag, policy)?;
        Ok(*slot)
    }
}

// ============================================================================
// Two-Terminal Form
// ============================================================================

/// Form for the two-resistor solver. Every field is editable; the solver
/// overwrites whichever one it computes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TwoTerminalForm {
    pub vs: String,
    pub r1: String,
    pub r1_unit: UnitScale,
    pub r2: String,
    pub r2_unit: UnitScale,
    pub vout: String,
}

impl TwoTerminalForm {
    pub const INPUT_FIELDS: [&'static str; 4] = ["vs", "r1", "r2", "vout"];
    pub const UNIT_FIELDS: [&'static str; 2] = ["r1", "r2"];

    pub fn snapshot(&self) -> TwoTerminalInput {
        TwoTerminalInput {
            vs: self.vs.clone(),
            r1: ResistorEntry::new(self.r1.clone(), self.r1_unit),
            r2: ResistorEntry::new(self.r2.clone(), self.r2_unit),
            vout: self.vout.clone(),
        }
    }

    /// Solve for the blank field and write the result into it.
    ///
    /// With nothing blank, Vout is overwritten with the recomputed value.
    pub fn calculate(&mut self, settings: &SolverSettings) -> CalcResult<TwoTerminalResult> {
        let result = two_terminal::calculate(&self.snapshot())?;
        let text = result.formatted(settings.two_terminal_decimals);
        match result.solved_for {
            SolveFor::SourceVoltage => self.vs = text,
            SolveFor::R1 => self.r1 = text,
            SolveFor::R2 => self.r2 = text,
            SolveFor::OutputVoltage | SolveFor::Refresh => self.vout = text,
        }
        Ok(result)
    }

    pub fn clear(&mut self) {
        *self = TwoTerminalForm::default();
    }

    pub fn set_field(&mut self, field: &str, text: impl Into<String>) -> CalcResult<()> {
        let slot = match field {
            "vs" => &mut self.vs,
            "r1" => &mut self.r1,
            "r2" => &mut self.r2,
            "vout" => &mut self.vout,
            _ => return Err(DividerError::unknown_field(field)),
        };
        *slot = text.into();
        Ok(())
    }

    pub fn set_unit(&mut self, field: &str, tag: &str, policy: UnitPolicy) -> CalcResult<UnitScale> {
        let slot = match field {
            "r1" => &mut self.r1_unit,
            "r2" => &mut self.r2_unit,
            _ => return Err(DividerError::unknown_field(field)),
        };
        *slot = UnitScale::resolve(tag, policy)?;
        Ok(*slot)
    }
}
