//! Reports module for finledger
//!
//! Read-only analytics over a ledger: cash flow for a period and signed
//! totals grouped by category.

pub mod cash_flow;
pub mod category_breakdown;

pub use cash_flow::{net_change, total_expenses, total_income, CashFlowReport};
pub use category_breakdown::{group_by_category, UNCATEGORIZED};
