//! Display formatting for terminal output
//!
//! Plain-text tables for accounts, categories, operations and reports.

pub mod account;
pub mod category;
pub mod operation;
pub mod report;

pub use account::format_account_list;
pub use category::format_category_list;
pub use operation::{format_operation_register, format_operation_row};
pub use report::{
    format_cash_flow, format_category_breakdown, format_import_summary, format_recalculation,
};

/// Display width in characters, not bytes
pub(crate) fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if width_of(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("Продукты и напитки", 8), "Проду...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
