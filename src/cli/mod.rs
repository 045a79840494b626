//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod convert;
pub mod demo;
pub mod inspect;

use clap::ValueEnum;

use crate::export::ExportFormat;

pub use convert::{handle_convert_command, ConvertArgs};
pub use demo::{demo_ledger, handle_demo_command, DemoArgs};
pub use inspect::{handle_inspect_command, InspectArgs};

/// File format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Single JSON file
    Json,
    /// Operations file plus `_accounts` and `_categories` siblings
    Csv,
    /// Single YAML file
    #[value(alias = "yml")]
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}
