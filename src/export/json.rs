//! JSON Export functionality
//!
//! Writes the whole snapshot to a single file. Non-ASCII text is written
//! as-is, not escaped.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::LedgerResult;
use crate::export::snapshot::LedgerSnapshot;

/// Serialize a snapshot as JSON
pub fn write_json<W: Write>(
    snapshot: &LedgerSnapshot,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, snapshot)?;
    } else {
        serde_json::to_writer(&mut *writer, snapshot)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Parse a snapshot from JSON
pub fn read_json<R: Read>(reader: R) -> LedgerResult<LedgerSnapshot> {
    Ok(serde_json::from_reader(reader)?)
}

/// Export a snapshot to a JSON file
pub fn export_json_file(snapshot: &LedgerSnapshot, path: &Path, pretty: bool) -> LedgerResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(snapshot, &mut writer, pretty)?;
    writer.flush()?;
    Ok(())
}

/// Import a snapshot from a JSON file
pub fn import_json_file(path: &Path) -> LedgerResult<LedgerSnapshot> {
    read_json(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::snapshot::{AccountRecord, OperationRecord};
    use tempfile::TempDir;

    fn sample() -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: vec![AccountRecord {
                id: Some("acc-1".into()),
                name: Some("Основной счет".into()),
                balance: Some("10000".into()),
            }],
            operations: vec![OperationRecord {
                id: Some("op-1".into()),
                kind: Some("income".into()),
                account_id: Some("acc-1".into()),
                amount: Some("50000.00".into()),
                timestamp: Some("2024-01-15T09:00:00".into()),
                description: Some("Зарплата".into()),
                category_id: None,
            }],
            total_accounts: Some(1),
            total_operations: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_pretty_output_keeps_unicode() {
        let mut out = Vec::new();
        write_json(&sample(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Основной счет"));
        assert!(text.contains("\n  \"accounts\""));
        assert!(text.contains("\"bank_account_id\": \"acc-1\""));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        export_json_file(&sample(), &path, true).unwrap();
        let imported = import_json_file(&path).unwrap();

        assert_eq!(imported, sample());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = read_json("{\"accounts\": [".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = import_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::Io(_)));
    }
}
