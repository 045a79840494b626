//! CLI command that rewrites a ledger file in another format

use std::path::PathBuf;

use clap::Args;

use crate::cli::FormatArg;
use crate::config::Settings;
use crate::display::format_import_summary;
use crate::error::LedgerResult;
use crate::export::ExportFormat;
use crate::services::DataTransferService;
use crate::storage::Ledger;

/// Arguments for `convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// File to read
    pub input: PathBuf,

    /// Output path; the format extension is appended if missing
    pub output: PathBuf,

    /// Input format (inferred from the extension if omitted)
    #[arg(long, value_enum)]
    pub from_format: Option<FormatArg>,

    /// Output format (inferred from the output extension, then the configured default)
    #[arg(long, value_enum)]
    pub to_format: Option<FormatArg>,
}

/// Handle the convert command
pub fn handle_convert_command(settings: &Settings, args: ConvertArgs) -> LedgerResult<()> {
    let to_format = match args.to_format {
        Some(format) => format.into(),
        None => ExportFormat::from_path(&args.output).unwrap_or(settings.default_format),
    };

    let mut ledger = Ledger::new();
    let mut service = DataTransferService::new(&mut ledger).with_options(settings.export_options());

    let summary = service.import_from(&args.input, args.from_format.map(Into::into))?;
    print!("{}", format_import_summary(&summary));

    for path in service.export_to(&args.output, to_format)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
