//! Category service
//!
//! Creation and lookup of categories. Names are not required to be unique.

use tracing::debug;

use crate::models::{Category, OperationKind};
use crate::storage::Ledger;

/// Service for category management
pub struct CategoryService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Create a new category
    pub fn create(&mut self, kind: OperationKind, name: &str) -> Category {
        let category = Category::new(kind, name);

        self.ledger.upsert_category(category.clone());
        debug!(category_id = %category.id, kind = %kind, name = %category.name, "category created");

        category
    }

    /// Get a category by ID
    pub fn get(&self, id: &str) -> Option<Category> {
        self.ledger.category(id).cloned()
    }

    /// Get all categories in insertion order
    pub fn list(&self) -> Vec<Category> {
        self.ledger.categories().cloned().collect()
    }

    /// Get the categories of one kind
    pub fn list_by_kind(&self, kind: OperationKind) -> Vec<Category> {
        self.ledger
            .categories()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);

        let cat = service.create(OperationKind::Income, "Salary");
        assert_eq!(service.get(cat.id.as_str()), Some(cat.clone()));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);

        let first = service.create(OperationKind::Expense, "Food");
        let second = service.create(OperationKind::Expense, "Food");

        assert_ne!(first.id, second.id);
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_list_by_kind() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);
        service.create(OperationKind::Income, "Salary");
        service.create(OperationKind::Expense, "Food");
        service.create(OperationKind::Expense, "Transport");

        let expenses: Vec<_> = service
            .list_by_kind(OperationKind::Expense)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(expenses, vec!["Food", "Transport"]);
    }
}
