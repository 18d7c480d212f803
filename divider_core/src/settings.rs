//! # Solver Settings
//!
//! Knobs that shape how results are presented and how unit tags are
//! resolved. Every field has a serde default, so a partial TOML or JSON
//! document (or an empty one) yields a usable configuration.
//!
//! ```rust
//! use divider_core::settings::SolverSettings;
//! use divider_core::units::UnitPolicy;
//!
//! let settings: SolverSettings = serde_json::from_str(r#"{ "two_terminal_decimals": 3 }"#).unwrap();
//! assert_eq!(settings.two_terminal_decimals, 3);
//! assert_eq!(settings.three_resistor_decimals, 6);
//! assert_eq!(settings.unit_policy, UnitPolicy::Strict);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::UnitPolicy;

/// Decimal places used for the three-resistor voltages
pub const DEFAULT_THREE_RESISTOR_DECIMALS: usize = 6;

/// Decimal places used for the two-terminal solved field
pub const DEFAULT_TWO_TERMINAL_DECIMALS: usize = 2;

/// Global solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Precision of the three-resistor divider voltages
    pub three_resistor_decimals: usize,

    /// Precision of the value written back by the two-terminal solver
    pub two_terminal_decimals: usize,

    /// Treatment of unrecognized unit tags
    pub unit_policy: UnitPolicy,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            three_resistor_decimals: DEFAULT_THREE_RESISTOR_DECIMALS,
            two_terminal_decimals: DEFAULT_TWO_TERMINAL_DECIMALS,
            unit_policy: UnitPolicy::Strict,
        }
    }
}

impl SolverSettings {
    pub fn with_unit_policy(mut self, policy: UnitPolicy) -> Self {
        self.unit_policy = policy;
        self
    }
}
