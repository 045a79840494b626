//! Data transfer service
//!
//! File-level facade over the export module: snapshot the ledger and write
//! it out, or read a file and merge it back in.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::LedgerResult;
use crate::export::{export_snapshot, import_snapshot, ExportFormat, ExportOptions, LedgerSnapshot};
use crate::services::import::{ImportService, ImportSummary};
use crate::storage::Ledger;

/// Service for moving a ledger to and from files
pub struct DataTransferService<'a> {
    ledger: &'a mut Ledger,
    options: ExportOptions,
}

impl<'a> DataTransferService<'a> {
    /// Create a new data transfer service with default writer options
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self {
            ledger,
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Export the whole ledger; returns every file written
    ///
    /// The format's extension is appended when `path` lacks it.
    pub fn export_to(&self, path: &Path, format: ExportFormat) -> LedgerResult<Vec<PathBuf>> {
        let snapshot = LedgerSnapshot::from_ledger(&*self.ledger);
        let written = export_snapshot(&snapshot, path, format, &self.options)?;

        info!(
            %format,
            accounts = snapshot.accounts.len(),
            categories = snapshot.categories.len(),
            operations = snapshot.operations.len(),
            files = written.len(),
            "ledger exported"
        );

        Ok(written)
    }

    /// Import a file into the ledger
    ///
    /// The format is inferred from the extension when not given.
    pub fn import_from(
        &mut self,
        path: &Path,
        format: Option<ExportFormat>,
    ) -> LedgerResult<ImportSummary> {
        let snapshot = import_snapshot(path, format)?;
        info!(path = %path.display(), records = snapshot.record_count(), "snapshot read");

        Ok(ImportService::new(&mut *self.ledger).import(&snapshot))
    }
}
