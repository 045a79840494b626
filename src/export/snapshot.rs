//! Format-neutral ledger snapshot
//!
//! The snapshot is the pivot between ledger entities and every file format.
//! Entities are flattened to plain text fields: decimals as exact strings,
//! timestamps as ISO-8601, kinds as their lowercase name. When reading, every
//! field is optional and may arrive as text, a number, a boolean or null, so
//! one malformed record never prevents the others from loading. A record that
//! does not fit the record shape at all (a nested field, a bare scalar) is
//! kept as a blank placeholder and rejected when it is converted.

use chrono::Local;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    format_timestamp, parse_timestamp, Account, AccountId, Category, CategoryId, Money, Operation,
    OperationId, OperationKind,
};
use crate::storage::Ledger;

/// Column order of the accounts table
pub const ACCOUNT_FIELDS: [&str; 3] = ["id", "name", "balance"];
/// Column order of the categories table
pub const CATEGORY_FIELDS: [&str; 3] = ["id", "type", "name"];
/// Column order of the operations table
pub const OPERATION_FIELDS: [&str; 7] = [
    "id",
    "type",
    "bank_account_id",
    "amount",
    "date",
    "description",
    "category_id",
];

/// Full ledger snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// All accounts
    #[serde(default, deserialize_with = "lenient_records")]
    pub accounts: Vec<AccountRecord>,

    /// All categories
    #[serde(default, deserialize_with = "lenient_records")]
    pub categories: Vec<CategoryRecord>,

    /// All operations
    #[serde(default, deserialize_with = "lenient_records")]
    pub operations: Vec<OperationRecord>,

    /// Export timestamp
    #[serde(default, deserialize_with = "lenient_text")]
    pub export_date: Option<String>,

    /// Total number of accounts at export time
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_accounts: Option<u64>,

    /// Total number of operations at export time
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_operations: Option<u64>,
}

/// Flattened account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub balance: Option<String>,
}

/// Flattened category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// Flattened operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(rename = "bank_account_id", default, deserialize_with = "lenient_text")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub amount: Option<String>,
    #[serde(rename = "date", default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category_id: Option<String>,
}

impl LedgerSnapshot {
    /// Flatten a ledger, preserving insertion order
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            accounts: ledger.accounts().map(AccountRecord::from).collect(),
            categories: ledger.categories().map(CategoryRecord::from).collect(),
            operations: ledger.operations().map(OperationRecord::from).collect(),
            export_date: Some(format_timestamp(&Local::now().naive_local())),
            total_accounts: Some(ledger.account_count() as u64),
            total_operations: Some(ledger.operation_count() as u64),
        }
    }

    /// Merge the collections of another snapshot into this one
    pub fn extend(&mut self, other: LedgerSnapshot) {
        self.accounts.extend(other.accounts);
        self.categories.extend(other.categories);
        self.operations.extend(other.operations);
    }

    pub fn record_count(&self) -> usize {
        self.accounts.len() + self.categories.len() + self.operations.len()
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            id: Some(account.id.to_string()),
            name: Some(account.name.clone()),
            balance: Some(account.balance.to_string()),
        }
    }
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.to_string()),
            kind: Some(category.kind.as_str().to_string()),
            name: Some(category.name.clone()),
        }
    }
}

impl From<&Operation> for OperationRecord {
    fn from(op: &Operation) -> Self {
        Self {
            id: Some(op.id.to_string()),
            kind: Some(op.kind.as_str().to_string()),
            account_id: Some(op.account_id.to_string()),
            amount: Some(op.amount.to_string()),
            timestamp: Some(format_timestamp(&op.timestamp)),
            description: op.description.clone(),
            category_id: op.category_id.as_ref().map(|c| c.to_string()),
        }
    }
}

impl AccountRecord {
    /// Build the typed account, generating an id when none is given
    pub fn to_account(&self) -> LedgerResult<Account> {
        reject_blank(self)?;
        let name = required(&self.name, "name")?;
        let balance = parse_money(required(&self.balance, "balance")?)?;
        Account::with_id(id_or_new(&self.id), name, balance)
    }
}

impl CategoryRecord {
    /// Build the typed category, generating an id when none is given
    pub fn to_category(&self) -> LedgerResult<Category> {
        reject_blank(self)?;
        let kind = required(&self.kind, "type")?.parse::<OperationKind>()?;
        let name = required(&self.name, "name")?;
        Ok(Category::with_id(id_or_new(&self.id), kind, name))
    }
}

impl OperationRecord {
    /// Build the typed operation, generating an id when none is given
    pub fn to_operation(&self) -> LedgerResult<Operation> {
        reject_blank(self)?;
        let kind = required(&self.kind, "type")?.parse::<OperationKind>()?;
        let account_id = AccountId::from(required(&self.account_id, "bank_account_id")?);
        let amount = parse_money(required(&self.amount, "amount")?)?;
        let timestamp = parse_timestamp(required(&self.timestamp, "date")?)?;
        let category_id = non_empty(&self.category_id).map(CategoryId::from);

        Operation::with_id(
            id_or_new(&self.id),
            kind,
            account_id,
            amount,
            timestamp,
            self.description.clone(),
            category_id,
        )
    }
}

fn reject_blank<T: Default + PartialEq>(record: &T) -> LedgerResult<()> {
    if *record == T::default() {
        return Err(LedgerError::Validation("malformed record".into()));
    }
    Ok(())
}

fn required<'r>(value: &'r Option<String>, field: &str) -> LedgerResult<&'r str> {
    value
        .as_deref()
        .ok_or_else(|| LedgerError::Validation(format!("missing required field '{}'", field)))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn id_or_new<T: From<String> + Default>(value: &Option<String>) -> T {
    match non_empty(value) {
        Some(raw) => T::from(raw.to_string()),
        None => T::default(),
    }
}

fn parse_money(raw: &str) -> LedgerResult<Money> {
    Money::parse(raw).map_err(|e| LedgerError::Validation(e.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordOrJunk<T> {
    Record(T),
    Malformed(de::IgnoredAny),
}

/// Read a collection row by row; rows that do not parse become blank records
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let rows = Vec::<RecordOrJunk<T>>::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| match row {
            RecordOrJunk::Record(record) => record,
            RecordOrJunk::Malformed(_) => T::default(),
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountValue {
    Whole(u64),
    Float(f64),
    Text(String),
    Other(de::IgnoredAny),
}

/// Informational counters; anything that is not a non-negative integer is dropped
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<CountValue>::deserialize(deserializer)? {
        Some(CountValue::Whole(n)) => Some(n),
        Some(CountValue::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Some(f as u64)
        }
        Some(CountValue::Text(text)) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(count)
}

/// Accept any scalar as text; null becomes `None`
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientText)
}

struct LenientText;

impl<'de> Visitor<'de> for LenientText {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(LenientText)
    }
}
