//! YAML Export functionality
//!
//! Writes the whole snapshot to a single block-style YAML file, optionally
//! preceded by a comment header.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::LedgerResult;
use crate::export::snapshot::LedgerSnapshot;

/// Serialize a snapshot as YAML
pub fn write_yaml<W: Write>(
    snapshot: &LedgerSnapshot,
    writer: &mut W,
    header: bool,
) -> LedgerResult<()> {
    if header {
        writeln!(writer, "# finledger export")?;
        if let Some(date) = &snapshot.export_date {
            writeln!(writer, "# Generated: {}", date)?;
        }
        writeln!(writer, "#")?;
        writeln!(writer, "# Keep it secure - it contains your financial data.")?;
        writeln!(writer)?;
    }

    serde_yaml::to_writer(&mut *writer, snapshot)?;
    Ok(())
}

/// Parse a snapshot from YAML
pub fn read_yaml<R: Read>(reader: R) -> LedgerResult<LedgerSnapshot> {
    Ok(serde_yaml::from_reader(reader)?)
}

/// Export a snapshot to a YAML file
pub fn export_yaml_file(snapshot: &LedgerSnapshot, path: &Path, header: bool) -> LedgerResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_yaml(snapshot, &mut writer, header)?;
    writer.flush()?;
    Ok(())
}

/// Import a snapshot from a YAML file
pub fn import_yaml_file(path: &Path) -> LedgerResult<LedgerSnapshot> {
    read_yaml(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::snapshot::{AccountRecord, CategoryRecord};
    use tempfile::TempDir;

    fn sample() -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: vec![AccountRecord {
                id: Some("acc-1".into()),
                name: Some("Checking".into()),
                balance: Some("100.50".into()),
            }],
            categories: vec![CategoryRecord {
                id: Some("cat-1".into()),
                kind: Some("expense".into()),
                name: Some("Еда".into()),
            }],
            export_date: Some("2024-06-01T12:00:00".into()),
            total_accounts: Some(1),
            total_operations: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_and_block_style() {
        let mut out = Vec::new();
        write_yaml(&sample(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# finledger export\n# Generated: 2024-06-01T12:00:00\n"));
        assert!(text.contains("accounts:\n- id: acc-1\n"));
    }

    #[test]
    fn test_no_header() {
        let mut out = Vec::new();
        write_yaml(&sample(), &mut out, false).unwrap();
        assert!(!String::from_utf8(out).unwrap().starts_with('#'));
    }

    #[test]
    fn test_decimal_text_survives_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.yaml");

        export_yaml_file(&sample(), &path, true).unwrap();
        let imported = import_yaml_file(&path).unwrap();

        assert_eq!(imported, sample());
        assert_eq!(imported.accounts[0].balance.as_deref(), Some("100.50"));
        assert_eq!(imported.categories[0].name.as_deref(), Some("Еда"));
    }

    #[test]
    fn test_plain_numbers_are_read_as_text() {
        let yaml = "accounts:\n- name: Cash\n  balance: 250\n";
        let snapshot = read_yaml(yaml.as_bytes()).unwrap();
        assert_eq!(snapshot.accounts[0].balance.as_deref(), Some("250"));
        assert_eq!(snapshot.accounts[0].id, None);
        assert!(snapshot.operations.is_empty());
    }
}
