//! # Divider Equations
//!
//! The closed-form formulas used by the calculations, kept in one place so
//! they can be checked against a circuit reference on their own.
//!
//! ## Modules
//!
//! - [`divider`] - Series chain shares and two-resistor divider inverses

pub mod divider;

pub use divider::{
    bottom_resistance,
    output_voltage,
    series_resistance,
    source_voltage,
    top_resistance,
    voltage_share,
};
