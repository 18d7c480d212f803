//! Loading of [`SolverSettings`] from TOML.
//!
//! An explicit `--config` path must exist. Without one, the per-user file
//! `<config_dir>/divider/config.toml` is read when present, otherwise the
//! built-in defaults apply.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use divider_core::SolverSettings;

/// Per-user config file location
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("divider").join("config.toml"))
}

/// Resolve settings from an explicit path, the per-user file, or defaults.
pub fn load(explicit: Option<&Path>) -> Result<SolverSettings> {
    if let Some(path) = explicit {
        return read(path);
    }

    match default_path() {
        Some(path) if path.exists() => read(&path),
        _ => {
            tracing::debug!("no config file found, using default settings");
            Ok(SolverSettings::default())
        }
    }
}

fn read(path: &Path) -> Result<SolverSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings = parse(&content).with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Parse settings from TOML text
pub fn parse(content: &str) -> Result<SolverSettings> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use divider_core::UnitPolicy;

    #[test]
    fn test_parse_partial() {
        let settings = parse("two_terminal_decimals = 4").unwrap();
        assert_eq!(settings.two_terminal_decimals, 4);
        assert_eq!(settings.three_resistor_decimals, 6);
        assert_eq!(settings.unit_policy, UnitPolicy::Strict);
    }

    #[test]
    fn test_parse_rejects_bad_policy() {
        assert!(parse(r#"unit_policy = "sloppy""#).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let missing = std::env::temp_dir().join("divider-test-does-not-exist.toml");
        assert!(load(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("divider-test-{}.toml", std::process::id()));
        std::fs::write(&path, "three_resistor_decimals = 2\nunit_policy = \"lenient\"\n").unwrap();
        let settings = load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.three_resistor_decimals, 2);
        assert_eq!(settings.unit_policy, UnitPolicy::Lenient);
    }
}
