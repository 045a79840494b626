//! Operation display formatting
//!
//! Register-style listing; account and category ids are resolved to names
//! through the ledger.

use crate::display::truncate;
use crate::models::{Operation, OperationKind};
use crate::reports::UNCATEGORIZED;
use crate::storage::Ledger;

/// Format a single operation for display (register row)
pub fn format_operation_row(op: &Operation, ledger: &Ledger) -> String {
    let sign = match op.kind {
        OperationKind::Income => "+",
        OperationKind::Expense => "-",
    };

    let account = ledger
        .account(op.account_id.as_str())
        .map(|a| a.name.as_str())
        .unwrap_or("(unknown)");

    let category = op
        .category_id
        .as_ref()
        .and_then(|id| ledger.category(id.as_str()))
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED);

    format!(
        "{:19}  {:<16}  {:>13}  {:<16}  {}",
        op.timestamp.format("%Y-%m-%d %H:%M:%S"),
        truncate(account, 16),
        format!("{}{}", sign, op.amount),
        truncate(category, 16),
        op.description.as_deref().unwrap_or("")
    )
}

/// Format a list of operations as a register
pub fn format_operation_register<'a, I>(operations: I, ledger: &Ledger) -> String
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut rows = operations.into_iter().peekable();
    if rows.peek().is_none() {
        return "No operations found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:19}  {:<16}  {:>13}  {:<16}  {}\n",
        "Date", "Account", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for op in rows {
        output.push_str(&format_operation_row(op, ledger));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_timestamp, Money};
    use crate::services::{AccountService, CreateOperationInput, OperationService};

    #[test]
    fn test_register_resolves_names() {
        let mut ledger = Ledger::new();
        let account = AccountService::new(&mut ledger)
            .create("Wallet", Money::parse("20").unwrap())
            .unwrap();
        OperationService::new(&mut ledger)
            .create(
                CreateOperationInput::new(
                    OperationKind::Expense,
                    account.id,
                    Money::parse("4.50").unwrap(),
                    parse_timestamp("2024-03-01T08:00:00").unwrap(),
                )
                .description("Coffee"),
            )
            .unwrap();

        let output = format_operation_register(ledger.operations(), &ledger);
        assert!(output.contains("Wallet"));
        assert!(output.contains("-4.50"));
        assert!(output.contains(UNCATEGORIZED));
        assert!(output.contains("Coffee"));
    }

    #[test]
    fn test_empty_register() {
        let ledger = Ledger::new();
        assert_eq!(
            format_operation_register(ledger.operations(), &ledger),
            "No operations found.\n"
        );
    }
}
