//! Export module for finledger
//!
//! Moves a ledger snapshot to and from files in three formats:
//! - JSON: single file, machine-readable
//! - YAML: single file, human-readable
//! - CSV: one file per collection (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;
pub mod snapshot;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

pub use self::csv::{export_csv_files, import_csv_files, CsvPaths, CsvTable};
pub use json::{export_json_file, import_json_file, read_json, write_json};
pub use snapshot::{AccountRecord, CategoryRecord, LedgerSnapshot, OperationRecord};
pub use yaml::{export_yaml_file, import_yaml_file, read_yaml, write_yaml};

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Yaml,
}

impl ExportFormat {
    /// Every format, in a fixed order
    pub fn all() -> [ExportFormat; 3] {
        [Self::Json, Self::Csv, Self::Yaml]
    }

    /// Canonical file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }

    /// Parse a format name (case-insensitive, `yml` accepted)
    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::parse(ext),
            None => Err(LedgerError::UnsupportedFormat(format!(
                "cannot infer format of '{}'",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writer knobs that do not change the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent JSON output
    pub pretty_json: bool,
    /// Prefix YAML output with a comment header
    pub yaml_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            yaml_header: true,
        }
    }
}

/// Append `.<ext>` unless the path already ends with it
pub fn with_extension(path: &Path, format: ExportFormat) -> PathBuf {
    let ext = format.extension();
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));

    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

/// Write a snapshot in the given format; returns every file written
pub fn export_snapshot(
    snapshot: &LedgerSnapshot,
    path: &Path,
    format: ExportFormat,
    options: &ExportOptions,
) -> LedgerResult<Vec<PathBuf>> {
    let path = with_extension(path, format);

    match format {
        ExportFormat::Json => {
            export_json_file(snapshot, &path, options.pretty_json)?;
            Ok(vec![path])
        }
        ExportFormat::Yaml => {
            export_yaml_file(snapshot, &path, options.yaml_header)?;
            Ok(vec![path])
        }
        ExportFormat::Csv => export_csv_files(snapshot, &path),
    }
}

/// Read a snapshot; the format is inferred from the extension when not given
pub fn import_snapshot(path: &Path, format: Option<ExportFormat>) -> LedgerResult<LedgerSnapshot> {
    let format = match format {
        Some(format) => format,
        None => ExportFormat::from_path(path)?,
    };

    match format {
        ExportFormat::Json => import_json_file(path),
        ExportFormat::Yaml => import_yaml_file(path),
        ExportFormat::Csv => import_csv_files(path),
    }
}
