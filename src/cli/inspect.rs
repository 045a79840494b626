//! CLI command that loads a file and reports on it

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;

use crate::cli::FormatArg;
use crate::display::{
    format_account_list, format_cash_flow, format_category_breakdown, format_category_list,
    format_import_summary, format_operation_register, format_recalculation,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::parse_timestamp;
use crate::reports::{group_by_category, CashFlowReport};
use crate::services::{DataTransferService, ReconciliationService};
use crate::storage::Ledger;

/// Arguments for `inspect`
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File to load
    pub file: PathBuf,

    /// Input format (inferred from the extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Report period start (YYYY-MM-DD or ISO-8601 date-time)
    #[arg(long)]
    pub from: Option<String>,

    /// Report period end, inclusive; a bare date covers the whole day
    #[arg(long)]
    pub to: Option<String>,

    /// Rebuild balances from the operations before reporting
    #[arg(long)]
    pub recalculate: bool,
}

/// Handle the inspect command
pub fn handle_inspect_command(args: InspectArgs) -> LedgerResult<()> {
    let mut ledger = Ledger::new();
    let summary = DataTransferService::new(&mut ledger)
        .import_from(&args.file, args.format.map(Into::into))?;
    print!("{}", format_import_summary(&summary));

    if args.recalculate {
        let result = ReconciliationService::new(&mut ledger).recalculate_balances();
        print!("{}", format_recalculation(&result));
    }

    println!();
    println!("Accounts");
    print!("{}", format_account_list(&ledger.accounts().cloned().collect::<Vec<_>>()));
    println!();
    println!("Categories");
    print!("{}", format_category_list(&ledger.categories().cloned().collect::<Vec<_>>()));
    println!();
    println!("Operations");
    print!("{}", format_operation_register(ledger.operations(), &ledger));

    let Some((start, end)) = report_range(&ledger, args.from.as_deref(), args.to.as_deref())?
    else {
        return Ok(());
    };

    println!();
    print!("{}", format_cash_flow(&CashFlowReport::generate(&ledger, start, end)));
    println!();
    print!("{}", format_category_breakdown(&group_by_category(&ledger, start, end)));

    Ok(())
}

/// Resolve the report period; open ends fall back to the operation span
fn report_range(
    ledger: &Ledger,
    from: Option<&str>,
    to: Option<&str>,
) -> LedgerResult<Option<(NaiveDateTime, NaiveDateTime)>> {
    let earliest = ledger.operations().map(|op| op.timestamp).min();
    let latest = ledger.operations().map(|op| op.timestamp).max();

    let start = match from {
        Some(raw) => Some(parse_timestamp(raw)?),
        None => earliest,
    };
    let end = match to {
        Some(raw) => Some(parse_range_end(raw)?),
        None => latest,
    };

    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(LedgerError::Validation(format!(
            "report period starts after it ends: {} > {}",
            start, end
        ))),
        (Some(start), Some(end)) => Ok(Some((start, end))),
        _ => Ok(None),
    }
}

fn parse_range_end(raw: &str) -> LedgerResult<NaiveDateTime> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| LedgerError::Validation(format!("invalid date: {}", raw))),
        Err(_) => parse_timestamp(raw),
    }
}
