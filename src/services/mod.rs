//! Service layer for finledger
//!
//! The service layer provides business logic on top of the ledger store,
//! enforcing referential integrity and balance invariants, and moving
//! ledgers to and from files.

pub mod account;
pub mod category;
pub mod data_transfer;
pub mod import;
pub mod operation;
pub mod reconciliation;

pub use account::AccountService;
pub use category::CategoryService;
pub use data_transfer::DataTransferService;
pub use import::{ImportService, ImportSummary, RecordKind, SkippedRecord};
pub use operation::{CreateOperationInput, OperationService};
pub use reconciliation::{RecalculationResult, ReconciliationService};
