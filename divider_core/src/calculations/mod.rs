//! # Divider Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Snapshot of the field contents (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`three_resistor`] - Voltage across each of three series resistors
//! - [`two_terminal`] - Solve a two-resistor divider for its blank field

pub mod three_resistor;
pub mod two_terminal;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::measurement::RawResistorEntry;
use crate::settings::SolverSettings;
use crate::units::UnitPolicy;

// Re-export commonly used types
pub use three_resistor::{ThreeResistorInput, ThreeResistorResult};
pub use two_terminal::{SolveFor, TwoTerminalInput, TwoTerminalResult};

/// Enum wrapper for both divider variants.
///
/// ## JSON Example
///
/// ```json
/// { "type": "TwoTerminal", "vs": "10", "r1": { "text": "100" }, "r2": { "text": "100" }, "vout": "" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Three resistors in series, all fields required
    ThreeResistor(ThreeResistorInput),
    /// Two-resistor divider with one blank field
    TwoTerminal(TwoTerminalInput),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::ThreeResistor(_) => "ThreeResistor",
            CalculationItem::TwoTerminal(_) => "TwoTerminal",
        }
    }
}

/// A [`CalculationItem`] as read from a JSON document, before unit tags are
/// resolved.
///
/// Units are free text here (`"kΩ"`, `"M"`, `"kilo"`) so that
/// [`resolve`](Self::resolve) can apply the configured [`UnitPolicy`] and
/// report an unknown tag as `InvalidUnit` instead of a parse failure.
///
/// ## JSON Example
///
/// ```json
/// { "type": "TwoTerminal", "vs": "10", "r1": { "text": "1", "unit": "kΩ" }, "r2": { "text": "1", "unit": "kΩ" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    ThreeResistor {
        #[serde(default)]
        vin: String,
        #[serde(default)]
        r1: RawResistorEntry,
        #[serde(default)]
        r2: RawResistorEntry,
        #[serde(default)]
        r3: RawResistorEntry,
    },
    TwoTerminal {
        #[serde(default)]
        vs: String,
        #[serde(default)]
        r1: RawResistorEntry,
        #[serde(default)]
        r2: RawResistorEntry,
        #[serde(default)]
        vout: String,
    },
}

impl CalculationRequest {
    /// Resolve every unit tag under `policy`.
    pub fn resolve(&self, policy: UnitPolicy) -> CalcResult<CalculationItem> {
        Ok(match self {
            CalculationRequest::ThreeResistor { vin, r1, r2, r3 } => {
                CalculationItem::ThreeResistor(ThreeResistorInput {
                    vin: vin.clone(),
                    r1: r1.resolve(policy)?,
                    r2: r2.resolve(policy)?,
                    r3: r3.resolve(policy)?,
                })
            }
            CalculationRequest::TwoTerminal { vs, r1, r2, vout } => CalculationItem::TwoTerminal(TwoTerminalInput {
                vs: vs.clone(),
                r1: r1.resolve(policy)?,
                r2: r2.resolve(policy)?,
                vout: vout.clone(),
            }),
        })
    }
}

/// Result of [`calculate_item`], carrying both raw numbers and the text the
/// boundary should write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    ThreeResistor {
        result: ThreeResistorResult,
        /// Display text for V(R1), V(R2), V(R3)
        display: [String; 3],
    },
    TwoTerminal {
        result: TwoTerminalResult,
        /// Field that receives `display`
        field: String,
        display: String,
    },
}

/// Run whichever calculation `item` describes.
///
/// ```rust
/// use divider_core::calculations::{calculate_item, CalculationItem, CalculationOutcome};
/// use divider_core::settings::SolverSettings;
///
/// let item: CalculationItem = serde_json::from_str(
///     r#"{ "type": "TwoTerminal", "vs": "10", "r1": { "text": "100" }, "r2": { "text": "100" } }"#,
/// ).unwrap();
///
/// match calculate_item(&item, &SolverSettings::default()).unwrap() {
///     CalculationOutcome::TwoTerminal { field, display, .. } => {
///         assert_eq!(field, "vout");
///         assert_eq!(display, "5.00");
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn calculate_item(item: &CalculationItem, settings: &SolverSettings) -> CalcResult<CalculationOutcome> {
    tracing::debug!(calc_type = item.calc_type(), "running calculation");
    match item {
        CalculationItem::ThreeResistor(input) => {
            let result = three_resistor::calculate(input)?;
            let display = result.formatted(settings.three_resistor_decimals);
            Ok(CalculationOutcome::ThreeResistor { result, display })
        }
        CalculationItem::TwoTerminal(input) => {
            let result = two_terminal::calculate(input)?;
            Ok(CalculationOutcome::TwoTerminal {
                field: result.solved_for.field().to_string(),
                display: result.formatted(settings.two_terminal_decimals),
                result,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DividerError;

    #[test]
    fn test_three_resistor_item_from_json() {
        let item: CalculationItem = serde_json::from_str(
            r#"{
                "type": "ThreeResistor",
                "vin": "5",
                "r1": { "text": "1", "unit": "kilo" },
                "r2": { "text": "1000" },
                "r3": { "text": "0", "unit": "mega" }
            }"#,
        )
        .unwrap();

        let outcome = calculate_item(&item, &SolverSettings::default()).unwrap();
        match outcome {
            CalculationOutcome::ThreeResistor { display, .. } => {
                assert_eq!(display, ["2.500000", "2.500000", "0.000000"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    const SYMBOL_REQUEST: &str = r#"{
        "type": "TwoTerminal",
        "vs": "10",
        "r1": { "text": "1", "unit": "kΩ" },
        "r2": { "text": "1", "unit": "k" }
    }"#;

    #[test]
    fn test_request_accepts_unit_symbols() {
        let request: CalculationRequest = serde_json::from_str(SYMBOL_REQUEST).unwrap();
        let item = request.resolve(UnitPolicy::Strict).unwrap();
        match &item {
            CalculationItem::TwoTerminal(input) => {
                assert_eq!(input.r1.unit, crate::units::UnitScale::Kilo);
                assert_eq!(input.r2.unit, crate::units::UnitScale::Kilo);
            }
            other => panic!("unexpected item: {other:?}"),
        }
        match calculate_item(&item, &SolverSettings::default()).unwrap() {
            CalculationOutcome::TwoTerminal { display, .. } => assert_eq!(display, "5.00"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_request_unknown_unit_follows_policy() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "type": "ThreeResistor",
                "vin": "9",
                "r1": { "text": "1", "unit": "GΩ" },
                "r2": { "text": "1" },
                "r3": { "text": "1" }
            }"#,
        )
        .unwrap();

        let err = request.resolve(UnitPolicy::Strict).unwrap_err();
        assert_eq!(err, DividerError::invalid_unit("GΩ"));
        assert_eq!(err.kind(), crate::errors::ErrorKind::InvalidUnit);

        let item = request.resolve(UnitPolicy::Lenient).unwrap();
        match calculate_item(&item, &SolverSettings::default()).unwrap() {
            CalculationOutcome::ThreeResistor { display, .. } => {
                assert_eq!(display, ["3.000000", "3.000000", "3.000000"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_precision_follows_settings() {
        let item = CalculationItem::TwoTerminal(TwoTerminalInput {
            vs: "10".to_string(),
            r1: crate::measurement::ResistorEntry::new("200", Default::default()),
            r2: crate::measurement::ResistorEntry::new("100", Default::default()),
            vout: String::new(),
        });
        let settings = SolverSettings {
            two_terminal_decimals: 4,
            ..SolverSettings::default()
        };
        match calculate_item(&item, &settings).unwrap() {
            CalculationOutcome::TwoTerminal { display, .. } => assert_eq!(display, "3.3333"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_error_propagates() {
        let item = CalculationItem::ThreeResistor(ThreeResistorInput::default());
        let err = calculate_item(&item, &SolverSettings::default()).unwrap_err();
        assert!(matches!(err, DividerError::InvalidInput { .. }));
    }

    #[test]
    fn test_outcome_serialization() {
        let item = CalculationItem::TwoTerminal(TwoTerminalInput {
            vs: "10".to_string(),
            r1: Default::default(),
            r2: crate::measurement::ResistorEntry::new("100", Default::default()),
            vout: "5".to_string(),
        });
        let outcome = calculate_item(&item, &SolverSettings::default()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "TwoTerminal");
        assert_eq!(json["field"], "r1");
        assert_eq!(json["display"], "100.00");
    }
}
