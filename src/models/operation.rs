//! Operation model
//!
//! A single dated income or expense event affecting exactly one account.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{AccountId, CategoryId, OperationId};
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// ISO-8601 layout used when rendering timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Direction of an operation (and the declared kind of a category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money coming into the account
    Income,
    /// Money leaving the account
    Expense,
}

impl OperationKind {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse a kind from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Signed effect of `amount` on a balance
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| LedgerError::Validation(format!("Unknown operation type: '{}'", s)))
    }
}

/// A posted income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OperationFields")]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: OperationKind,

    /// The account this operation belongs to
    #[serde(rename = "bank_account_id")]
    pub account_id: AccountId,

    /// Strictly positive amount
    pub amount: Money,

    /// When the operation happened
    #[serde(rename = "date")]
    pub timestamp: NaiveDateTime,

    /// Free-form description
    pub description: Option<String>,

    /// Category, if any
    pub category_id: Option<CategoryId>,
}

impl Operation {
    /// Create a new operation with a generated id
    pub fn new(
        kind: OperationKind,
        account_id: AccountId,
        amount: Money,
        timestamp: NaiveDateTime,
        description: Option<String>,
        category_id: Option<CategoryId>,
    ) -> LedgerResult<Self> {
        Self::with_id(
            OperationId::new(),
            kind,
            account_id,
            amount,
            timestamp,
            description,
            category_id,
        )
    }

    /// Create an operation with a known id
    pub fn with_id(
        id: OperationId,
        kind: OperationKind,
        account_id: AccountId,
        amount: Money,
        timestamp: NaiveDateTime,
        description: Option<String>,
        category_id: Option<CategoryId>,
    ) -> LedgerResult<Self> {
        let operation = Self {
            id,
            kind,
            account_id,
            amount,
            timestamp,
            description,
            category_id,
        };
        operation.validate()?;
        Ok(operation)
    }

    /// Validate the operation
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Operation amount must be positive (got {})",
                self.amount
            )));
        }

        Ok(())
    }

    /// Signed effect on the account balance
    pub fn balance_delta(&self) -> Money {
        self.kind.signed(self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == OperationKind::Income
    }

    /// Check if the timestamp lies in the closed interval `[start, end]`
    pub fn falls_within(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start <= self.timestamp && self.timestamp <= end
    }
}

/// Unvalidated shape of a deserialized operation
#[derive(Deserialize)]
struct OperationFields {
    id: OperationId,
    #[serde(rename = "type")]
    kind: OperationKind,
    #[serde(rename = "bank_account_id")]
    account_id: AccountId,
    amount: Money,
    #[serde(rename = "date")]
    timestamp: NaiveDateTime,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category_id: Option<CategoryId>,
}

impl TryFrom<OperationFields> for Operation {
    type Error = LedgerError;

    fn try_from(fields: OperationFields) -> LedgerResult<Self> {
        Self::with_id(
            fields.id,
            fields.kind,
            fields.account_id,
            fields.amount,
            fields.timestamp,
            fields.description,
            fields.category_id,
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} on {}",
            format_timestamp(&self.timestamp),
            self.kind,
            self.amount,
            self.account_id
        )
    }
}

/// Render a timestamp as ISO-8601 text
///
/// The fractional part is only written when it is non-zero.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse ISO-8601 text into a timestamp
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.f]`, the same with a space separator,
/// RFC 3339 with an offset (kept as its local wall-clock time) and a bare
/// `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(s: &str) -> LedgerResult<NaiveDateTime> {
    let s = s.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_local());
    }
    if let Some(ts) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(ts);
    }

    Err(LedgerError::Validation(format!("Invalid timestamp: '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_new_operation() {
        let op = Operation::new(
            OperationKind::Expense,
            AccountId::from("acc"),
            Money::from(30),
            ts("2024-03-01T12:00:00"),
            Some("Lunch".into()),
            None,
        )
        .unwrap();
        assert_eq!(op.balance_delta(), Money::from(-30));
        assert!(!op.is_income());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [Money::zero(), Money::from(-5)] {
            let err = Operation::new(
                OperationKind::Income,
                AccountId::from("acc"),
                amount,
                ts("2024-03-01"),
                None,
                None,
            )
            .unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(OperationKind::parse("INCOME"), Some(OperationKind::Income));
        assert_eq!(OperationKind::parse(" expense"), Some(OperationKind::Expense));
        assert_eq!(OperationKind::parse("transfer"), None);
        assert!("refund".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_timestamp_formats() {
        let base = ts("2024-05-01T10:30:00");
        assert_eq!(format_timestamp(&base), "2024-05-01T10:30:00");
        assert_eq!(ts("2024-05-01 10:30:00"), base);
        assert_eq!(ts("2024-05-01T10:30"), base);
        assert_eq!(ts("2024-05-01T10:30:00+03:00"), base);
        assert_eq!(
            format_timestamp(&ts("2024-05-01")),
            "2024-05-01T00:00:00"
        );
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_fractional_seconds_round_trip() {
        let t = ts("2024-05-01T10:30:00.123456");
        let text = format_timestamp(&t);
        assert_eq!(text, "2024-05-01T10:30:00.123456");
        assert_eq!(ts(&text), t);
    }

    #[test]
    fn test_falls_within_is_inclusive() {
        let op = Operation::new(
            OperationKind::Income,
            AccountId::from("acc"),
            Money::from(1),
            ts("2024-01-31T23:59:59"),
            None,
            None,
        )
        .unwrap();
        assert!(op.falls_within(ts("2024-01-01"), ts("2024-01-31T23:59:59")));
        assert!(op.falls_within(ts("2024-01-31T23:59:59"), ts("2024-02-01")));
        assert!(!op.falls_within(ts("2024-02-01"), ts("2024-02-28")));
    }

    #[test]
    fn test_deserialize_validates() {
        let valid = r#"{"id":"op","type":"income","bank_account_id":"acc","amount":"5","date":"2024-03-01T12:00:00"}"#;
        let op: Operation = serde_json::from_str(valid).unwrap();
        assert!(op.is_income());
        assert_eq!(op.category_id, None);

        let zero = valid.replace(r#""amount":"5""#, r#""amount":"0""#);
        let err = serde_json::from_str::<Operation>(&zero).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }
}
