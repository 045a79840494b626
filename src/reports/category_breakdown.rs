//! Category Breakdown
//!
//! Signed totals per category name over a closed date range.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use super::cash_flow::in_range;
use crate::models::Money;
use crate::storage::Ledger;

/// Label used when an operation has no category, or it does not resolve
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group operations in `[start, end]` by category name
///
/// Income adds to the label's total and expense subtracts from it. Labels
/// only appear once an operation lands on them. Categories sharing a name
/// share a label.
pub fn group_by_category(
    ledger: &Ledger,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for op in in_range(ledger, start, end) {
        let label = op
            .category_id
            .as_ref()
            .and_then(|id| ledger.category(id.as_str()))
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED);

        let total = totals.entry(label.to_string()).or_default();
        *total = total.saturating_add(op.balance_delta());
    }

    totals
}
