//! CLI command that seeds a sample ledger and exports it

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::export::ExportFormat;
use crate::models::{parse_timestamp, Money, OperationKind};
use crate::services::{
    AccountService, CategoryService, CreateOperationInput, DataTransferService, OperationService,
};
use crate::storage::Ledger;

/// Target formats for the demo export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoFormat {
    Json,
    Csv,
    #[value(alias = "yml")]
    Yaml,
    /// Every supported format
    All,
}

impl DemoFormat {
    fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Json => vec![ExportFormat::Json],
            Self::Csv => vec![ExportFormat::Csv],
            Self::Yaml => vec![ExportFormat::Yaml],
            Self::All => ExportFormat::all().to_vec(),
        }
    }
}

/// Arguments for `demo`
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Output base path; the format extension is appended
    pub base: PathBuf,

    /// Format to write (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<DemoFormat>,
}

/// Build the sample ledger: two accounts, three categories, three operations
pub fn demo_ledger() -> LedgerResult<Ledger> {
    let mut ledger = Ledger::new();

    let main = AccountService::new(&mut ledger).create("Main account", Money::from(10000))?;
    AccountService::new(&mut ledger).create("Savings", Money::from(5000))?;

    let mut categories = CategoryService::new(&mut ledger);
    let salary = categories.create(OperationKind::Income, "Salary");
    let food = categories.create(OperationKind::Expense, "Food");
    let transport = categories.create(OperationKind::Expense, "Transport");

    let seed = [
        (OperationKind::Income, 50000, "2024-01-15T09:00:00", "Salary", salary.id),
        (OperationKind::Expense, 3000, "2024-01-16T18:30:00", "Groceries", food.id),
        (OperationKind::Expense, 1500, "2024-01-17T23:10:00", "Taxi", transport.id),
    ];

    let mut operations = OperationService::new(&mut ledger);
    for (kind, amount, at, description, category) in seed {
        operations.create(
            CreateOperationInput::new(kind, main.id.clone(), Money::from(amount), parse_timestamp(at)?)
                .description(description)
                .category(category),
        )?;
    }

    Ok(ledger)
}

/// Handle the demo command
pub fn handle_demo_command(settings: &Settings, args: DemoArgs) -> LedgerResult<()> {
    let mut ledger = demo_ledger()?;

    let formats = match args.format {
        Some(format) => format.formats(),
        None => vec![settings.default_format],
    };

    let service = DataTransferService::new(&mut ledger).with_options(settings.export_options());
    for format in formats {
        for path in service.export_to(&args.base, format)? {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_ledger_balances() {
        let ledger = demo_ledger().unwrap();

        assert_eq!(ledger.account_count(), 2);
        assert_eq!(ledger.category_count(), 3);
        assert_eq!(ledger.operation_count(), 3);

        let main = ledger.accounts().next().unwrap();
        assert_eq!(main.balance, Money::from(55500));
    }
}
