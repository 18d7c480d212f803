//! # Three-Resistor Divider
//!
//! Splits an input voltage across three series resistors in proportion to
//! their resistances. Every field is required.
//!
//! ## Example
//!
//! ```rust
//! use divider_core::calculations::three_resistor::{calculate, ThreeResistorInput};
//! use divider_core::measurement::ResistorEntry;
//! use divider_core::settings::SolverSettings;
//! use divider_core::units::UnitScale;
//!
//! let input = ThreeResistorInput {
//!     vin: "5".to_string(),
//!     r1: ResistorEntry::new("1", UnitScale::Kilo),
//!     r2: ResistorEntry::new("1000", UnitScale::Base),
//!     r3: ResistorEntry::new("0", UnitScale::Mega),
//! };
//!
//! let result = calculate(&input).unwrap();
//! let [v1, v2, v3] = result.formatted(SolverSettings::default().three_resistor_decimals);
//! assert_eq!(v1, "2.500000");
//! assert_eq!(v2, "2.500000");
//! assert_eq!(v3, "0.000000");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::divider::{series_resistance, voltage_share};
use crate::errors::{CalcResult, DividerError};
use crate::format::format_fixed;
use crate::measurement::{parse_required, ResistorEntry};

/// Input snapshot for the three-resistor divider.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vin": "5",
///   "r1": { "text": "1", "unit": "kilo" },
///   "r2": { "text": "1000", "unit": "base" },
///   "r3": { "text": "0", "unit": "mega" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThreeResistorInput {
    /// Input voltage text, in volts
    #[serde(default)]
    pub vin: String,

    #[serde(default)]
    pub r1: ResistorEntry,

    #[serde(default)]
    pub r2: ResistorEntry,

    #[serde(default)]
    pub r3: ResistorEntry,
}

impl ThreeResistorInput {
    /// Parse every field, in the order Vin, R1, R2, R3.
    ///
    /// Returns (Vin in volts, [R1, R2, R3] in ohms). A resistance that
    /// overflows after unit scaling is `InvalidInput`.
    pub fn parse(&self) -> CalcResult<(f64, [f64; 3])> {
        let vin = parse_required("vin", &self.vin)?;
        let r1 = self.r1.required_ohms("r1")?;
        let r2 = self.r2.required_ohms("r2")?;
        let r3 = self.r3.required_ohms("r3")?;
        Ok((vin, [r1, r2, r3]))
    }
}

/// Voltages across each resistor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_resistance_ohms": 2000.0,
///   "v_r1_volts": 2.5,
///   "v_r2_volts": 2.5,
///   "v_r3_volts": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreeResistorResult {
    /// R1 + R2 + R3 after unit scaling
    pub total_resistance_ohms: f64,

    /// Voltage across R1
    pub v_r1_volts: f64,

    /// Voltage across R2
    pub v_r2_volts: f64,

    /// Voltage across R3
    pub v_r3_volts: f64,
}

impl ThreeResistorResult {
    pub fn voltages(&self) -> [f64; 3] {
        [self.v_r1_volts, self.v_r2_volts, self.v_r3_volts]
    }

    /// Display strings for the three output fields
    pub fn formatted(&self, decimals: usize) -> [String; 3] {
        self.voltages().map(|v| format_fixed(v, decimals))
    }
}

/// Calculate the voltage across each resistor.
///
/// # Returns
///
/// * `Ok(ThreeResistorResult)` - Voltages across R1, R2, R3
/// * `Err(InvalidInput)` - A field is empty, not a number, or out of range
/// * `Err(ZeroTotalResistance)` - R1 + R2 + R3 is exactly zero
pub fn calculate(input: &ThreeResistorInput) -> CalcResult<ThreeResistorResult> {
    let (vin, resistances) = input.parse()?;

    let total = series_resistance(&resistances);
    if total == 0.0 {
        return Err(DividerError::ZeroTotalResistance);
    }
    if !total.is_finite() {
        return Err(DividerError::invalid_input(
            "r1 + r2 + r3",
            total.to_string(),
            "Total resistance is out of range",
        ));
    }

    let [v1, v2, v3] = resistances.map(|r| voltage_share(vin, r, total));
    tracing::debug!(vin, total_ohms = total, v1, v2, v3, "three-resistor divider solved");

    Ok(ThreeResistorResult {
        total_resistance_ohms: total,
        v_r1_volts: v1,
        v_r2_volts: v2,
        v_r3_volts: v3,
    })
}
