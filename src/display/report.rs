//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for the analytics reports and for the
//! summaries returned by import and reconciliation.

use std::collections::BTreeMap;

use crate::display::width_of;
use crate::models::Money;
use crate::reports::CashFlowReport;
use crate::services::{ImportSummary, RecalculationResult};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a cash flow report
pub fn format_cash_flow(report: &CashFlowReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Cash flow {} .. {}\n",
        report.start.format("%Y-%m-%d %H:%M"),
        report.end.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&separator(36));
    output.push('\n');
    output.push_str(&format!("{:<20}{:>16}\n", "Income", report.total_income.to_string()));
    output.push_str(&format!(
        "{:<20}{:>16}\n",
        "Expenses",
        report.total_expenses.to_string()
    ));
    output.push_str(&format!("{:<20}{:>16}\n", "Net change", report.net_change.to_string()));
    output.push_str(&format!("{:<20}{:>16}\n", "Operations", report.operation_count));

    output
}

/// Format signed per-category totals
pub fn format_category_breakdown(totals: &BTreeMap<String, Money>) -> String {
    if totals.is_empty() {
        return "No operations in range.\n".to_string();
    }

    let label_width = totals.keys().map(|k| width_of(k)).max().unwrap_or(8).max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<label_width$}  {:>14}\n",
        "Category",
        "Total",
        label_width = label_width
    ));
    output.push_str(&format!(
        "{:-<label_width$}  {:->14}\n",
        "",
        "",
        label_width = label_width
    ));

    for (label, total) in totals {
        output.push_str(&format!(
            "{:<label_width$}  {:>14}\n",
            label,
            total.to_string(),
            label_width = label_width
        ));
    }

    output
}

/// Format the outcome of an import
pub fn format_import_summary(summary: &ImportSummary) -> String {
    let mut output = format!(
        "Imported {} accounts, {} categories, {} operations\n",
        summary.accounts, summary.categories, summary.operations
    );

    if !summary.skipped.is_empty() {
        output.push_str(&format!("Skipped {} records:\n", summary.skipped.len()));
        for skipped in &summary.skipped {
            output.push_str(&format!(
                "  {} #{}: {}\n",
                skipped.kind, skipped.index, skipped.reason
            ));
        }
    }

    output
}

/// Format the outcome of a balance recalculation
pub fn format_recalculation(result: &RecalculationResult) -> String {
    let mut output = format!(
        "Recalculated {} accounts from {} operations\n",
        result.accounts_reset, result.operations_applied
    );

    if result.orphaned_operations > 0 {
        output.push_str(&format!(
            "  {} operations reference missing accounts\n",
            result.orphaned_operations
        ));
    }
    if result.negative_accounts > 0 {
        output.push_str(&format!(
            "  {} accounts ended below zero\n",
            result.negative_accounts
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{RecordKind, SkippedRecord};

    #[test]
    fn test_category_breakdown_sorted() {
        let mut totals = BTreeMap::new();
        totals.insert("Salary".to_string(), Money::parse("500").unwrap());
        totals.insert("Food".to_string(), Money::parse("-70").unwrap());

        let output = format_category_breakdown(&totals);
        let food = output.find("Food").unwrap();
        let salary = output.find("Salary").unwrap();
        assert!(food < salary);
        assert!(output.contains("-70"));
    }

    #[test]
    fn test_import_summary_lists_skips() {
        let summary = ImportSummary {
            accounts: 1,
            categories: 0,
            operations: 2,
            skipped: vec![SkippedRecord {
                kind: RecordKind::Operation,
                index: 1,
                reason: "missing required field 'amount'".into(),
            }],
        };

        let output = format_import_summary(&summary);
        assert!(output.starts_with("Imported 1 accounts, 0 categories, 2 operations"));
        assert!(output.contains("operation #1: missing required field 'amount'"));
    }

    #[test]
    fn test_recalculation_quiet_when_clean() {
        let result = RecalculationResult {
            accounts_reset: 2,
            operations_applied: 5,
            orphaned_operations: 0,
            negative_accounts: 0,
        };
        assert_eq!(
            format_recalculation(&result),
            "Recalculated 2 accounts from 5 operations\n"
        );
    }
}
