//! User settings for the expense dashboard
//!
//! Display preferences and the default filter window. Stored as
//! `config.json` in the base directory; missing fields take their defaults.

use std::fmt::Write;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Days covered by the list/chart filter when no dates are given
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,

    /// Maximum rows shown by `list` unless overridden
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_range_days() -> u32 {
    14
}

fn default_list_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_range_days: default_range_days(),
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, ExpenseError> {
        read_json::<Option<Settings>, _>(paths.settings_file())
            .map(Option::unwrap_or_default)
            .map(Settings::sanitized)
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Replace values that cannot be used for display with their defaults
    pub fn sanitized(mut self) -> Self {
        if !is_usable_date_format(&self.date_format) {
            warn!(
                "Ignoring unusable date format '{}'; using '{}'",
                self.date_format,
                default_date_format()
            );
            self.date_format = default_date_format();
        }
        self
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

/// Whether a strftime format can render a calendar date without error
fn is_usable_date_format(format: &str) -> bool {
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_range_days, 14);
        assert_eq!(settings.list_limit, 50);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            default_range_days: 30,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.default_range_days, 14);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_unusable_date_format_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"date_format": "%Q", "currency_symbol": "€"}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.date_format, Settings::default().date_format);
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn test_date_format_checks() {
        assert!(is_usable_date_format("%Y-%m-%d"));
        assert!(is_usable_date_format("%b %-d, %Y"));
        assert!(!is_usable_date_format("%Q"));
        // A time zone offset cannot be rendered for a bare date
        assert!(!is_usable_date_format("%Y %z"));
    }
}
