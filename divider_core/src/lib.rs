//! # divider_core - Resistive Voltage Divider Solver
//!
//! `divider_core` is the computational core of the divider calculator. It
//! solves series-resistor divider arithmetic from a snapshot of form fields
//! and returns either a result or a classified error. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from an input snapshot to a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Every failure is a [`DividerError`] variant, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use divider_core::calculations::two_terminal::{calculate, TwoTerminalInput};
//! use divider_core::measurement::ResistorEntry;
//! use divider_core::units::UnitScale;
//!
//! let input = TwoTerminalInput {
//!     vs: "10".to_string(),
//!     r1: ResistorEntry::new("100", UnitScale::Base),
//!     r2: ResistorEntry::new("100", UnitScale::Base),
//!     vout: String::new(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.formatted(2), "5.00");
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("OutputVoltage"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Three-resistor and two-terminal divider solvers
//! - [`equations`] - The closed-form divider formulas
//! - [`form`] - Headless form state with calculate/clear
//! - [`measurement`] - Field text parsing and unit-scaled magnitudes
//! - [`units`] - Unit scales, unit policy and the `Ohms` newtype
//! - [`settings`] - Output precision and unit policy
//! - [`format`] - Fixed-precision rounding and display
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod form;
pub mod format;
pub mod measurement;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_item, CalculationItem, CalculationOutcome, CalculationRequest, SolveFor};
pub use errors::{CalcResult, DividerError, ErrorKind};
pub use form::{ThreeResistorForm, TwoTerminalForm};
pub use settings::SolverSettings;
pub use units::{UnitPolicy, UnitScale};
