//! Text and JSON rendering of calculation outcomes and errors.

use std::io::{self, Write};

use divider_core::calculations::{CalculationOutcome, SolveFor, TwoTerminalResult};
use divider_core::format::format_rounded;
use divider_core::units::{Ohms, UnitScale};
use divider_core::{DividerError, SolverSettings};

/// Write a successful outcome.
///
/// The two-terminal summary line uses the same rounding and precision as the
/// solved field.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &CalculationOutcome,
    settings: &SolverSettings,
    json: bool,
) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(outcome).map_err(io::Error::other)?;
        return writeln!(out, "{}", text);
    }

    match outcome {
        CalculationOutcome::ThreeResistor { result, display } => {
            writeln!(out, "Voltage Across R1 (V): {}", display[0])?;
            writeln!(out, "Voltage Across R2 (V): {}", display[1])?;
            writeln!(out, "Voltage Across R3 (V): {}", display[2])?;
            writeln!(out, "Total resistance:      {}", describe_ohms(result.total_resistance_ohms))?;
        }
        CalculationOutcome::TwoTerminal { result, display, .. } => {
            let decimals = settings.two_terminal_decimals;
            writeln!(out, "{} = {} {}", result.solved_for.display_name(), display, unit_label(result))?;
            writeln!(
                out,
                "  Vs = {} V, R1 = {}, R2 = {}, Vout = {} V",
                format_rounded(result.source_voltage_volts, decimals),
                describe_ohms(result.r1_ohms),
                describe_ohms(result.r2_ohms),
                format_rounded(result.output_voltage_volts, decimals),
            )?;
            if result.solved_for == SolveFor::Refresh {
                writeln!(out, "  (all fields were filled: Vout recomputed, previous value discarded)")?;
            }
        }
    }
    Ok(())
}

/// Write a classified calculation error.
pub fn write_error<W: Write>(out: &mut W, error: &DividerError, json: bool) -> io::Result<()> {
    if json {
        let body = serde_json::json!({
            "error_code": error.error_code(),
            "kind": error.kind(),
            "message": error.to_string(),
            "error": error,
        });
        let text = serde_json::to_string_pretty(&body).map_err(io::Error::other)?;
        return writeln!(out, "{}", text);
    }
    writeln!(out, "Error [{}]: {}", error.error_code(), error)
}

fn unit_label(result: &TwoTerminalResult) -> &'static str {
    match result.unit {
        Some(unit) => unit.symbol(),
        None => "V",
    }
}

/// Resistance in the largest scale that keeps the magnitude at or above one
fn describe_ohms(ohms: f64) -> String {
    let scale = UnitScale::ALL
        .into_iter()
        .rev()
        .find(|s| ohms.abs() >= s.multiplier())
        .unwrap_or(UnitScale::Base);
    format!("{} {}", format_rounded(Ohms(ohms).in_scale(scale), 2), scale.symbol())
}
