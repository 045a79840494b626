//! Operation service
//!
//! Posts income and expense operations against accounts. Posting checks the
//! account and category references, validates the amount, applies the
//! balance change and records the operation; on any failure the ledger is
//! left untouched.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, CategoryId, Money, Operation, OperationKind};
use crate::storage::Ledger;

/// Service for operation management
pub struct OperationService<'a> {
    ledger: &'a mut Ledger,
}

/// Input for creating a new operation
#[derive(Debug, Clone)]
pub struct CreateOperationInput {
    pub kind: OperationKind,
    pub account_id: AccountId,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl CreateOperationInput {
    pub fn new(
        kind: OperationKind,
        account_id: impl Into<AccountId>,
        amount: Money,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            account_id: account_id.into(),
            amount,
            timestamp,
            description: None,
            category_id: None,
        }
    }

    /// Attach a description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a category
    pub fn category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}

impl<'a> OperationService<'a> {
    /// Create a new operation service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Post a new operation
    ///
    /// Checks run in this order: account exists, category exists (when
    /// given), amount is positive, funds cover an expense, the new balance
    /// is representable. The balance is updated before the operation is
    /// recorded; both happen only when every check passed.
    pub fn create(&mut self, input: CreateOperationInput) -> LedgerResult<Operation> {
        let account = self
            .ledger
            .account(input.account_id.as_str())
            .ok_or_else(|| LedgerError::account_not_found(input.account_id.as_str()))?;

        if let Some(cat_id) = &input.category_id {
            if self.ledger.category(cat_id.as_str()).is_none() {
                return Err(LedgerError::category_not_found(cat_id.as_str()));
            }
        }

        let operation = Operation::new(
            input.kind,
            input.account_id,
            input.amount,
            input.timestamp,
            input.description,
            input.category_id,
        )?;

        if operation.kind == OperationKind::Expense && !account.can_cover(operation.amount) {
            return Err(LedgerError::InsufficientFunds {
                account: account.name.clone(),
                needed: operation.amount,
                available: account.balance,
            });
        }

        let balance = account
            .balance
            .checked_add(operation.balance_delta())
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Balance of account '{}' would overflow",
                    account.name
                ))
            })?;

        let account = self
            .ledger
            .account_mut(operation.account_id.as_str())
            .ok_or_else(|| LedgerError::account_not_found(operation.account_id.as_str()))?;
        account.balance = balance;

        self.ledger.upsert_operation(operation.clone());
        debug!(
            operation_id = %operation.id,
            kind = %operation.kind,
            amount = %operation.amount,
            account_id = %operation.account_id,
            balance = %balance,
            "operation posted"
        );

        Ok(operation)
    }

    /// Get an operation by ID
    pub fn get(&self, id: &str) -> Option<Operation> {
        self.ledger.operation(id).cloned()
    }

    /// Get all operations in insertion order
    pub fn list(&self) -> Vec<Operation> {
        self.ledger.operations().cloned().collect()
    }

    /// Get the operations posted to one account
    pub fn list_for_account(&self, account_id: &str) -> Vec<Operation> {
        self.ledger
            .operations()
            .filter(|op| op.account_id.as_str() == account_id)
            .cloned()
            .collect()
    }
}
