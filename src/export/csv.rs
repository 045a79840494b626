//! CSV Export functionality
//!
//! A snapshot is spread over three files sharing a base path:
//!
//! - `<base>.csv`: operations
//! - `<base>_accounts.csv`: accounts
//! - `<base>_categories.csv`: categories
//!
//! A file is only written when its collection is non-empty. On import the
//! file kind is chosen by naming convention: a path containing `_accounts`
//! or `_categories` is read as that table, anything else is the operations
//! file, and its siblings are picked up when they exist. The check is a
//! plain substring match on the whole path.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::debug;

use crate::error::LedgerResult;
use crate::export::snapshot::{
    AccountRecord, CategoryRecord, LedgerSnapshot, OperationRecord, ACCOUNT_FIELDS,
    CATEGORY_FIELDS, OPERATION_FIELDS,
};

const ACCOUNTS_SUFFIX: &str = "_accounts";
const CATEGORIES_SUFFIX: &str = "_categories";

/// Which table a CSV file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvTable {
    Accounts,
    Categories,
    Operations,
}

impl CsvTable {
    /// Classify a path by naming convention
    pub fn from_path(path: &Path) -> Self {
        let text = path.to_string_lossy();
        if text.contains(ACCOUNTS_SUFFIX) {
            Self::Accounts
        } else if text.contains(CATEGORIES_SUFFIX) {
            Self::Categories
        } else {
            Self::Operations
        }
    }
}

/// The three file paths derived from an operations file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPaths {
    pub operations: PathBuf,
    pub accounts: PathBuf,
    pub categories: PathBuf,
}

impl CsvPaths {
    /// Derive sibling paths from `<base>.csv`
    pub fn from_operations_path(path: &Path) -> Self {
        let base = match path.extension() {
            Some(ext) if ext == "csv" => path.with_extension(""),
            _ => path.to_path_buf(),
        };

        Self {
            operations: path.to_path_buf(),
            accounts: sibling(&base, ACCOUNTS_SUFFIX),
            categories: sibling(&base, CATEGORIES_SUFFIX),
        }
    }
}

fn sibling(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    name.push(".csv");
    PathBuf::from(name)
}

/// Export a snapshot to up to three CSV files; returns the paths written
pub fn export_csv_files(snapshot: &LedgerSnapshot, path: &Path) -> LedgerResult<Vec<PathBuf>> {
    let paths = CsvPaths::from_operations_path(path);
    let mut written = Vec::new();

    if !snapshot.operations.is_empty() {
        let file = File::create(&paths.operations)?;
        write_operations(&snapshot.operations, file)?;
        written.push(paths.operations);
    }

    if !snapshot.accounts.is_empty() {
        let file = File::create(&paths.accounts)?;
        write_accounts(&snapshot.accounts, file)?;
        written.push(paths.accounts);
    }

    if !snapshot.categories.is_empty() {
        let file = File::create(&paths.categories)?;
        write_categories(&snapshot.categories, file)?;
        written.push(paths.categories);
    }

    debug!(files = written.len(), "csv export written");
    Ok(written)
}

/// Import a snapshot from a CSV file, following the naming convention
pub fn import_csv_files(path: &Path) -> LedgerResult<LedgerSnapshot> {
    let mut snapshot = LedgerSnapshot::default();

    match CsvTable::from_path(path) {
        CsvTable::Accounts => snapshot.accounts = read_accounts(File::open(path)?)?,
        CsvTable::Categories => snapshot.categories = read_categories(File::open(path)?)?,
        CsvTable::Operations => {
            snapshot.operations = read_operations(File::open(path)?)?;

            let paths = CsvPaths::from_operations_path(path);
            if paths.accounts.exists() {
                debug!(path = %paths.accounts.display(), "loading sibling accounts file");
                snapshot.accounts = read_accounts(File::open(&paths.accounts)?)?;
            }
            if paths.categories.exists() {
                debug!(path = %paths.categories.display(), "loading sibling categories file");
                snapshot.categories = read_categories(File::open(&paths.categories)?)?;
            }
        }
    }

    Ok(snapshot)
}

/// Write the accounts table
pub fn write_accounts<W: Write>(records: &[AccountRecord], writer: W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(ACCOUNT_FIELDS)?;
    for r in records {
        csv.write_record([cell(&r.id), cell(&r.name), cell(&r.balance)])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the categories table
pub fn write_categories<W: Write>(records: &[CategoryRecord], writer: W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(CATEGORY_FIELDS)?;
    for r in records {
        csv.write_record([cell(&r.id), cell(&r.kind), cell(&r.name)])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the operations table
pub fn write_operations<W: Write>(records: &[OperationRecord], writer: W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(OPERATION_FIELDS)?;
    for r in records {
        csv.write_record([
            cell(&r.id),
            cell(&r.kind),
            cell(&r.account_id),
            cell(&r.amount),
            cell(&r.timestamp),
            cell(&r.description),
            cell(&r.category_id),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Read the accounts table
pub fn read_accounts<R: Read>(reader: R) -> LedgerResult<Vec<AccountRecord>> {
    read_rows(reader, |row| AccountRecord {
        id: row.value("id"),
        name: row.text("name"),
        balance: row.value("balance"),
    })
}

/// Read the categories table
pub fn read_categories<R: Read>(reader: R) -> LedgerResult<Vec<CategoryRecord>> {
    read_rows(reader, |row| CategoryRecord {
        id: row.value("id"),
        kind: row.value("type"),
        name: row.text("name"),
    })
}

/// Read the operations table
pub fn read_operations<R: Read>(reader: R) -> LedgerResult<Vec<OperationRecord>> {
    read_rows(reader, |row| OperationRecord {
        id: row.value("id"),
        kind: row.value("type"),
        account_id: row.value("bank_account_id"),
        amount: row.value("amount"),
        timestamp: row.value("date"),
        description: row.value("description"),
        category_id: row.value("category_id"),
    })
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// A data row viewed through its header
struct Row<'r> {
    columns: &'r HashMap<String, usize>,
    record: &'r StringRecord,
}

impl Row<'_> {
    /// Cell text; missing columns and empty cells are absent
    fn value(&self, column: &str) -> Option<String> {
        self.text(column).filter(|v| !v.is_empty())
    }

    /// Cell text; only missing columns are absent
    fn text(&self, column: &str) -> Option<String> {
        self.columns
            .get(column)
            .and_then(|&i| self.record.get(i))
            .map(str::to_string)
    }
}

fn read_rows<R, T, F>(reader: R, build: F) -> LedgerResult<Vec<T>>
where
    R: Read,
    F: Fn(&Row<'_>) -> T,
{
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: HashMap<String, usize> = csv
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        rows.push(build(&Row {
            columns: &columns,
            record: &record,
        }));
    }

    Ok(rows)
}
