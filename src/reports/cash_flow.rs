//! Cash Flow Report
//!
//! Income, expenses and their difference over a closed date range.

use chrono::NaiveDateTime;

use crate::models::{Money, Operation, OperationKind};
use crate::storage::Ledger;

/// Cash flow over a period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlowReport {
    /// Start of the range (inclusive)
    pub start: NaiveDateTime,
    /// End of the range (inclusive)
    pub end: NaiveDateTime,
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts (positive)
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_change: Money,
    /// Number of operations in range
    pub operation_count: usize,
}

impl CashFlowReport {
    /// Generate a cash flow report for a date range
    pub fn generate(ledger: &Ledger, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut operation_count = 0;

        for op in in_range(ledger, start, end) {
            if op.is_income() {
                total_income = total_income.saturating_add(op.amount);
            } else {
                total_expenses = total_expenses.saturating_add(op.amount);
            }
            operation_count += 1;
        }

        Self {
            start,
            end,
            total_income,
            total_expenses,
            net_change: total_income.saturating_sub(total_expenses),
            operation_count,
        }
    }
}

/// Sum of income minus sum of expenses over `[start, end]`
pub fn net_change(ledger: &Ledger, start: NaiveDateTime, end: NaiveDateTime) -> Money {
    in_range(ledger, start, end).map(Operation::balance_delta).sum()
}

/// Sum of income amounts over `[start, end]`
pub fn total_income(ledger: &Ledger, start: NaiveDateTime, end: NaiveDateTime) -> Money {
    sum_of_kind(ledger, OperationKind::Income, start, end)
}

/// Sum of expense amounts over `[start, end]`
pub fn total_expenses(ledger: &Ledger, start: NaiveDateTime, end: NaiveDateTime) -> Money {
    sum_of_kind(ledger, OperationKind::Expense, start, end)
}

fn sum_of_kind(
    ledger: &Ledger,
    kind: OperationKind,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Money {
    in_range(ledger, start, end)
        .filter(|op| op.kind == kind)
        .map(|op| op.amount)
        .sum()
}

pub(crate) fn in_range(
    ledger: &Ledger,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> impl Iterator<Item = &Operation> {
    ledger.operations().filter(move |op| op.falls_within(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;
    use crate::services::{AccountService, CreateOperationInput, OperationService};

    fn at(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let account = AccountService::new(&mut ledger)
            .create("Main", Money::from(1000))
            .unwrap();

        let mut ops = OperationService::new(&mut ledger);
        for (kind, amount, when) in [
            (OperationKind::Income, 500, "2024-06-01T09:00:00"),
            (OperationKind::Expense, 120, "2024-06-15T18:30:00"),
            (OperationKind::Expense, 80, "2024-07-02T12:00:00"),
        ] {
            ops.create(CreateOperationInput::new(
                kind,
                account.id.clone(),
                Money::from(amount),
                at(when),
            ))
            .unwrap();
        }

        ledger
    }

    #[test]
    fn test_net_change() {
        let ledger = sample_ledger();
        assert_eq!(
            net_change(&ledger, at("2024-06-01"), at("2024-06-30")),
            Money::from(380)
        );
    }

    #[test]
    fn test_empty_range_is_zero() {
        let ledger = sample_ledger();
        assert!(net_change(&ledger, at("2023-01-01"), at("2023-12-31")).is_zero());
        assert!(net_change(&Ledger::new(), at("2024-01-01"), at("2024-12-31")).is_zero());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ledger = sample_ledger();
        assert_eq!(
            net_change(&ledger, at("2024-06-15T18:30:00"), at("2024-07-02T12:00:00")),
            Money::from(-200)
        );
    }

    #[test]
    fn test_totals() {
        let ledger = sample_ledger();
        let (start, end) = (at("2024-01-01"), at("2024-12-31"));
        assert_eq!(total_income(&ledger, start, end), Money::from(500));
        assert_eq!(total_expenses(&ledger, start, end), Money::from(200));
    }

    #[test]
    fn test_report() {
        let ledger = sample_ledger();
        let report = CashFlowReport::generate(&ledger, at("2024-06-01"), at("2024-06-30"));

        assert_eq!(report.total_income, Money::from(500));
        assert_eq!(report.total_expenses, Money::from(120));
        assert_eq!(report.net_change, Money::from(380));
        assert_eq!(report.operation_count, 2);
    }

    #[test]
    fn test_report_saturates_at_decimal_limit() {
        let max = Money::parse("79228162514264337593543950335").unwrap();
        let mut ledger = Ledger::new();
        for id in ["a", "b"] {
            ledger.upsert_operation(
                Operation::new(
                    OperationKind::Income,
                    crate::models::AccountId::from(id),
                    max,
                    at("2024-06-01"),
                    None,
                    None,
                )
                .unwrap(),
            );
        }

        let report = CashFlowReport::generate(&ledger, at("2024-01-01"), at("2024-12-31"));
        assert_eq!(report.total_income, max);
        assert_eq!(report.net_change, max);
        assert_eq!(net_change(&ledger, at("2024-01-01"), at("2024-12-31")), max);
    }
}
