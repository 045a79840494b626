//! Account service
//!
//! Provides business logic for account management: creation with
//! validation, lookup and listing.

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Account, Money};
use crate::storage::Ledger;

/// Service for account management
pub struct AccountService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Create a new account
    ///
    /// Fails with a validation error when `initial_balance` is negative; in
    /// that case nothing is stored.
    pub fn create(&mut self, name: &str, initial_balance: Money) -> LedgerResult<Account> {
        let account = Account::new(name, initial_balance)?;

        self.ledger.upsert_account(account.clone());
        debug!(account_id = %account.id, name = %account.name, balance = %account.balance, "account created");

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: &str) -> Option<Account> {
        self.ledger.account(id).cloned()
    }

    /// Find an account by exact name (first match in insertion order)
    pub fn find_by_name(&self, name: &str) -> Option<Account> {
        self.ledger.accounts().find(|a| a.name == name).cloned()
    }

    /// Get all accounts in insertion order
    pub fn list(&self) -> Vec<Account> {
        self.ledger.accounts().cloned().collect()
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> Money {
        self.ledger.accounts().map(|a| a.balance).sum()
    }
}
