//! Storage layer for finledger
//!
//! The [`Ledger`] is the in-memory store owning every account, category and
//! operation. It is an explicit value: create as many independent ledgers as
//! needed and pass them to the services. Raw writes are crate-private so the
//! invariants enforced by the services cannot be bypassed from outside.

pub mod table;

pub use table::{Keyed, Table};

use crate::models::{Account, Category, Operation};

/// The aggregate of accounts, categories and operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    accounts: Table<Account>,
    categories: Table<Category>,
    operations: Table<Operation>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account by id
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Get a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Get an operation by id
    pub fn operation(&self, id: &str) -> Option<&Operation> {
        self.operations.get(id)
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// All categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// All operations in insertion order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Check if the ledger holds no entities at all
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.categories.is_empty() && self.operations.is_empty()
    }

    pub(crate) fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub(crate) fn upsert_account(&mut self, account: Account) -> Option<Account> {
        self.accounts.upsert(account)
    }

    pub(crate) fn upsert_category(&mut self, category: Category) -> Option<Category> {
        self.categories.upsert(category)
    }

    pub(crate) fn upsert_operation(&mut self, operation: Operation) -> Option<Operation> {
        self.operations.upsert(operation)
    }

    /// Split borrow: mutable accounts next to read-only operations
    pub(crate) fn accounts_and_operations(&mut self) -> (&mut Table<Account>, &Table<Operation>) {
        (&mut self.accounts, &self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money};

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.account_count(), 0);
        assert!(ledger.account("missing").is_none());
    }

    #[test]
    fn test_independent_ledgers() {
        let mut first = Ledger::new();
        let second = Ledger::new();

        first.upsert_account(
            Account::with_id(AccountId::from("a"), "Only here", Money::zero()).unwrap(),
        );

        assert_eq!(first.account_count(), 1);
        assert!(second.is_empty());
    }
}
