//! User settings for finledger
//!
//! Manages export preferences: the default file format and writer options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::export::{ExportFormat, ExportOptions};

/// User settings for finledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Format used when none is given
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Indent JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Prefix YAML output with a comment header
    #[serde(default = "default_true")]
    pub yaml_header: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_format: ExportFormat::default(),
            pretty_json: true,
            yaml_header: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if there is no file
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LedgerError> {
        let path = match path {
            Some(path) if path.exists() => path,
            _ => return Ok(Settings::default()),
        };

        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Writer options derived from these settings
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            pretty_json: self.pretty_json,
            yaml_header: self.yaml_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_format, ExportFormat::Json);
        assert_eq!(settings.export_options(), ExportOptions::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_default(Some(&temp_dir.path().join("none.json"))).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let settings = Settings {
            default_format: ExportFormat::Yaml,
            yaml_header: false,
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded, settings);
        assert!(!loaded.export_options().yaml_header);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"default_format": "csv"}"#).unwrap();

        let loaded = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded.default_format, ExportFormat::Csv);
        assert!(loaded.pretty_json);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Settings::load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
