//! Reconciliation service
//!
//! Rebuilds every account balance from the operation log. This is a repair
//! step, not a re-validation: there are no sufficiency checks and the
//! resulting balances may be negative.

use tracing::{info, warn};

use crate::models::Money;
use crate::storage::Ledger;

/// Service for balance reconciliation
pub struct ReconciliationService<'a> {
    ledger: &'a mut Ledger,
}

/// Result of a full balance recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecalculationResult {
    /// Number of accounts reset
    pub accounts_reset: usize,
    /// Number of operations applied to a balance
    pub operations_applied: usize,
    /// Operations skipped because their account is not in the ledger
    pub orphaned_operations: usize,
    /// Accounts whose balance ended below zero
    pub negative_accounts: usize,
}

impl<'a> ReconciliationService<'a> {
    /// Create a new reconciliation service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Reset every balance to zero, then replay all operations
    ///
    /// Operations on the same account commute, so the order of replay does
    /// not change the outcome.
    pub fn recalculate_balances(&mut self) -> RecalculationResult {
        let (accounts, operations) = self.ledger.accounts_and_operations();
        let mut result = RecalculationResult::default();

        for account in accounts.iter_mut() {
            account.balance = Money::zero();
            result.accounts_reset += 1;
        }

        for op in operations {
            match accounts.get_mut(op.account_id.as_str()) {
                Some(account) => {
                    account.balance = match account.balance.checked_add(op.balance_delta()) {
                        Some(balance) => balance,
                        None => {
                            warn!(operation_id = %op.id, account_id = %account.id, "balance saturated at the decimal limit");
                            account.balance.saturating_add(op.balance_delta())
                        }
                    };
                    result.operations_applied += 1;
                }
                None => {
                    warn!(operation_id = %op.id, account_id = %op.account_id, "operation references a missing account");
                    result.orphaned_operations += 1;
                }
            }
        }

        result.negative_accounts = accounts.iter().filter(|a| a.balance.is_negative()).count();

        info!(
            accounts = result.accounts_reset,
            operations = result.operations_applied,
            orphaned = result.orphaned_operations,
            "balances recalculated"
        );

        result
    }
}
