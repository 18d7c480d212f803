//! # Resistive Divider Formulas
//!
//! Ohm's-law proportionality for series resistor chains and its algebraic
//! inverses for the two-resistor divider.
//!
//! ## Notation
//!
//! - `Vs` / `Vin` = Source voltage across the whole chain
//! - `Vout` = Voltage across R2 (the bottom resistor)
//! - `R1` = Top resistor, `R2` = Bottom resistor
//! - `Rt` = Total series resistance
//!
//! All resistances are in ohms and all voltages in volts. None of these
//! functions guard their denominators; callers check for an exact zero and
//! report it before evaluating.

// =============================================================================
// SERIES CHAIN
// =============================================================================

/// Total resistance of resistors in series
///
/// # Formula
/// Rt = R1 + R2 + ... + Rn
///
/// # Example
/// ```rust
/// use divider_core::equations::divider::series_resistance;
///
/// assert_eq!(series_resistance(&[1000.0, 1000.0, 0.0]), 2000.0);
/// ```
#[inline]
pub fn series_resistance(resistances: &[f64]) -> f64 {
    resistances.iter().sum()
}

/// Voltage across one resistor of a series chain
///
/// ```text
///   Vin ──┬── R1 ──┬── R2 ──┬── ... ── GND
///         │← V1  →│← V2  →│
/// ```
///
/// # Formula
/// Vi = Vin × Ri / Rt
#[inline]
pub fn voltage_share(vin: f64, r: f64, total: f64) -> f64 {
    vin * r / total
}

// =============================================================================
// TWO-RESISTOR DIVIDER
// Vs ── R1 ──┬── R2 ── GND
//            └── Vout
// =============================================================================

/// Output voltage of the divider
///
/// # Formula
/// Vout = Vs × R2 / (R1 + R2)
///
/// # Example
/// ```rust
/// use divider_core::equations::divider::output_voltage;
///
/// assert_eq!(output_voltage(10.0, 100.0, 100.0), 5.0);
/// ```
#[inline]
pub fn output_voltage(vs: f64, r1: f64, r2: f64) -> f64 {
    vs * r2 / (r1 + r2)
}

/// Source voltage required for a given output
///
/// # Formula
/// Vs = Vout × (R1 + R2) / R2
#[inline]
pub fn source_voltage(vout: f64, r1: f64, r2: f64) -> f64 {
    vout * (r1 + r2) / r2
}

/// Top resistor needed for a given output
///
/// # Formula
/// R1 = (Vs × R2 / Vout) − R2
#[inline]
pub fn top_resistance(vs: f64, r2: f64, vout: f64) -> f64 {
    (vs * r2 / vout) - r2
}

/// Bottom resistor needed for a given output
///
/// # Formula
/// R2 = Vout × R1 / (Vs − Vout)
///
/// # Example
/// ```rust
/// use divider_core::equations::divider::bottom_resistance;
///
/// assert_eq!(bottom_resistance(10.0, 100.0, 5.0), 100.0);
/// ```
#[inline]
pub fn bottom_resistance(vs: f64, r1: f64, vout: f64) -> f64 {
    vout * r1 / (vs - vout)
}
