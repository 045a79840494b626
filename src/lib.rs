//! finledger - personal finance ledger with file import/export
//!
//! This library keeps bank accounts, income/expense categories and the
//! operations posted against them in an in-memory ledger, enforces balance
//! and reference invariants on every mutation, and moves whole ledgers to
//! and from JSON, CSV and YAML files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: User settings
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, categories, operations, money)
//! - `storage`: In-memory ledger tables
//! - `services`: Business logic layer
//! - `export`: File formats and the snapshot they share
//! - `reports`: Read-only analytics
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finledger::export::ExportFormat;
//! use finledger::models::Money;
//! use finledger::services::{AccountService, DataTransferService};
//! use finledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! AccountService::new(&mut ledger).create("Checking", Money::from(100))?;
//! DataTransferService::new(&mut ledger).export_to("backup".as_ref(), ExportFormat::Json)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use storage::Ledger;
