//! Bot settings loaded from config.toml
//!
//! Every key is optional. A missing file or a missing section falls back to
//! the defaults below, so the bot can start with no config file at all.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How birthday lists are rendered
    pub display: DisplaySettings,
    /// Gift note behaviour
    pub gifts: GiftSettings,
}

/// Settings for rendering birthday lists
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Birthdays at most this many days away are highlighted as upcoming
    pub upcoming_window_days: i64,
    /// Maximum number of entries shown by `/birthdays`
    pub list_limit: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            upcoming_window_days: 7,
            list_limit: 25,
        }
    }
}

/// Settings for gift notes
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GiftSettings {
    /// Clear gift notes once the birthday they were written for has passed
    pub clear_after_birthday: bool,
    /// Symbol printed in front of budgets
    pub currency_symbol: String,
}

impl Default for GiftSettings {
    fn default() -> Self {
        Self {
            clear_after_birthday: true,
            currency_symbol: "€".to_string(),
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Loading settings from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_settings(&contents)
}

/// Parses settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from `CONFIG_PATH` (default `./config.toml`).
///
/// A missing file is not an error; defaults are used instead.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    if !Path::new(&path).exists() {
        info!("No config file at {path}, using default settings");
        return Ok(Settings::default());
    }

    load_settings(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() -> Result<()> {
        let toml_str = r#"
            [display]
            upcoming_window_days = 14
            list_limit = 10

            [gifts]
            clear_after_birthday = false
            currency_symbol = "$"
        "#;

        let settings = parse_settings(toml_str)?;
        assert_eq!(settings.display.upcoming_window_days, 14);
        assert_eq!(settings.display.list_limit, 10);
        assert!(!settings.gifts.clear_after_birthday);
        assert_eq!(settings.gifts.currency_symbol, "$");
        Ok(())
    }

    #[test]
    fn test_missing_keys_use_defaults() -> Result<()> {
        let settings = parse_settings("[display]\nlist_limit = 5\n")?;
        assert_eq!(settings.display.list_limit, 5);
        assert_eq!(settings.display.upcoming_window_days, 7);
        assert_eq!(settings.gifts, GiftSettings::default());

        assert_eq!(parse_settings("")?, Settings::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_settings("[display\nlist_limit = ");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_settings("definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
