//! Account display formatting
//!
//! Formats accounts for terminal output as a table with a total row.

use crate::display::width_of;
use crate::models::{Account, Money};

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    // Calculate column widths
    let name_width = accounts
        .iter()
        .map(|a| width_of(&a.name))
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {}\n",
        "Name",
        "Balance",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}  {:-<36}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {}\n",
            account.name,
            account.balance.to_string(),
            account.id,
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}\n",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "TOTAL",
        total.to_string(),
        name_width = name_width,
    ));

    output
}
