//! Snapshot import service
//!
//! Rebuilds typed entities from a raw snapshot and merges them into a
//! ledger. Records that cannot be rebuilt, and operations whose references
//! do not resolve after the merge, are skipped and reported; the rest of the
//! batch still lands.

use std::fmt;

use tracing::{debug, info, warn};

use crate::export::LedgerSnapshot;
use crate::storage::Ledger;

/// Kind of record in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Account,
    Category,
    Operation,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Category => write!(f, "category"),
            Self::Operation => write!(f, "operation"),
        }
    }
}

/// A record left out of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub kind: RecordKind,
    /// Position of the record within its collection
    pub index: usize,
    pub reason: String,
}

/// Result of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of accounts merged
    pub accounts: usize,
    /// Number of categories merged
    pub categories: usize,
    /// Number of operations merged
    pub operations: usize,
    /// Records that were not merged
    pub skipped: Vec<SkippedRecord>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.accounts + self.categories + self.operations
    }

    fn skip(&mut self, kind: RecordKind, index: usize, reason: String) {
        warn!(%kind, index, %reason, "skipping record");
        self.skipped.push(SkippedRecord {
            kind,
            index,
            reason,
        });
    }
}

/// Service for merging snapshots into a ledger
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Merge a snapshot into the ledger
    ///
    /// Existing entities with the same id are replaced; nothing else is
    /// cleared. Accounts and categories go in first so that operations can
    /// be checked against the merged state. Imported operations do not touch
    /// account balances.
    pub fn import(&mut self, snapshot: &LedgerSnapshot) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for (index, record) in snapshot.accounts.iter().enumerate() {
            match record.to_account() {
                Ok(account) => {
                    debug!(id = %account.id, "importing account");
                    self.ledger.upsert_account(account);
                    summary.accounts += 1;
                }
                Err(e) => summary.skip(RecordKind::Account, index, e.to_string()),
            }
        }

        for (index, record) in snapshot.categories.iter().enumerate() {
            match record.to_category() {
                Ok(category) => {
                    debug!(id = %category.id, "importing category");
                    self.ledger.upsert_category(category);
                    summary.categories += 1;
                }
                Err(e) => summary.skip(RecordKind::Category, index, e.to_string()),
            }
        }

        for (index, record) in snapshot.operations.iter().enumerate() {
            let op = match record.to_operation() {
                Ok(op) => op,
                Err(e) => {
                    summary.skip(RecordKind::Operation, index, e.to_string());
                    continue;
                }
            };

            if self.ledger.account(op.account_id.as_str()).is_none() {
                summary.skip(
                    RecordKind::Operation,
                    index,
                    format!("account not found: {}", op.account_id),
                );
                continue;
            }

            if let Some(category_id) = &op.category_id {
                if self.ledger.category(category_id.as_str()).is_none() {
                    summary.skip(
                        RecordKind::Operation,
                        index,
                        format!("category not found: {}", category_id),
                    );
                    continue;
                }
            }

            debug!(id = %op.id, "importing operation");
            self.ledger.upsert_operation(op);
            summary.operations += 1;
        }

        info!(
            accounts = summary.accounts,
            categories = summary.categories,
            operations = summary.operations,
            skipped = summary.skipped.len(),
            "import merged"
        );

        summary
    }
}
