//! Core data models for finledger
//!
//! This module contains the value records of the ledger domain: accounts,
//! categories and operations, plus the money and id types they share.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod operation;

pub use account::Account;
pub use category::Category;
pub use ids::{AccountId, CategoryId, OperationId};
pub use money::{Money, MoneyParseError};
pub use operation::{format_timestamp, parse_timestamp, Operation, OperationKind};
