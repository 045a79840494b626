//! Account model
//!
//! Represents a bank account holding a non-negative balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountFields")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Main checking")
    pub name: String,

    /// Current balance
    ///
    /// Only posting and reconciliation change it; the services keep it
    /// non-negative outside of reconciliation.
    pub balance: Money,
}

impl Account {
    /// Create a new account with a generated id
    pub fn new(name: impl Into<String>, balance: Money) -> LedgerResult<Self> {
        Self::with_id(AccountId::new(), name, balance)
    }

    /// Create an account with a known id
    pub fn with_id(id: AccountId, name: impl Into<String>, balance: Money) -> LedgerResult<Self> {
        let account = Self {
            id,
            name: name.into(),
            balance,
        };
        account.validate()?;
        Ok(account)
    }

    /// Validate the account
    pub fn validate(&self) -> LedgerResult<()> {
        if self.balance.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Account balance cannot be negative (got {})",
                self.balance
            )));
        }

        Ok(())
    }

    /// Check whether an expense of `amount` can be covered
    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}

/// Unvalidated shape of a deserialized account
#[derive(Deserialize)]
struct AccountFields {
    id: AccountId,
    name: String,
    balance: Money,
}

impl TryFrom<AccountFields> for Account {
    type Error = LedgerError;

    fn try_from(fields: AccountFields) -> LedgerResult<Self> {
        Self::with_id(fields.id, fields.name, fields.balance)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", Money::from(100)).unwrap();
        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance, Money::from(100));
        assert!(!account.id.as_str().is_empty());
    }

    #[test]
    fn test_zero_balance_allowed() {
        assert!(Account::new("Empty", Money::zero()).is_ok());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let err = Account::new("Overdrawn", Money::from(-1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_with_id_keeps_id() {
        let account =
            Account::with_id(AccountId::from("acc-1"), "Savings", Money::from(5)).unwrap();
        assert_eq!(account.id.as_str(), "acc-1");
    }

    #[test]
    fn test_can_cover() {
        let account = Account::new("Wallet", Money::from(30)).unwrap();
        assert!(account.can_cover(Money::from(30)));
        assert!(!account.can_cover(Money::from(31)));
    }

    #[test]
    fn test_display() {
        let account = Account::new("My Checking", Money::parse("12.50").unwrap()).unwrap();
        assert_eq!(format!("{}", account), "My Checking (12.50)");
    }

    #[test]
    fn test_deserialize_validates() {
        let account: Account =
            serde_json::from_str(r#"{"id":"a","name":"Cash","balance":"12.50"}"#).unwrap();
        assert_eq!(account.balance, Money::parse("12.50").unwrap());

        let result = serde_json::from_str::<Account>(r#"{"id":"a","name":"x","balance":"-1"}"#);
        assert!(result.unwrap_err().to_string().contains("negative"));
    }
}
