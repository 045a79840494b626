//! Category model
//!
//! Categories label operations as income- or expense-type. The kind is not
//! checked against the operations that reference a category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::operation::OperationKind;

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: OperationKind,

    /// Category name
    pub name: String,
}

impl Category {
    /// Create a new category with a generated id
    pub fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self::with_id(CategoryId::new(), kind, name)
    }

    /// Create a category with a known id
    pub fn with_id(id: CategoryId, kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.kind)
    }
}
