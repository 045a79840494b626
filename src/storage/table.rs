//! Insertion-ordered in-memory table
//!
//! Rows live in a `Vec` so iteration follows insertion order, which keeps
//! exports deterministic. A side index maps each key to its row.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{Account, AccountId, Category, CategoryId, Operation, OperationId};

/// An entity stored under its own id
pub trait Keyed {
    type Key: Clone + Eq + Hash + Debug + Borrow<str>;

    fn key(&self) -> &Self::Key;
}

impl Keyed for Account {
    type Key = AccountId;

    fn key(&self) -> &AccountId {
        &self.id
    }
}

impl Keyed for Category {
    type Key = CategoryId;

    fn key(&self) -> &CategoryId {
        &self.id
    }
}

impl Keyed for Operation {
    type Key = OperationId;

    fn key(&self) -> &OperationId {
        &self.id
    }
}

/// Keyed rows in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T: Keyed> {
    rows: Vec<T>,
    index: HashMap<T::Key, usize>,
}

impl<T: Keyed> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| &self.rows[pos])
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&pos) => self.rows.get_mut(pos),
            None => None,
        }
    }

    /// Insert a row, or replace the row with the same key in place
    ///
    /// Returns the replaced row, if any. A replaced row keeps its original
    /// position in the iteration order.
    pub fn upsert(&mut self, row: T) -> Option<T> {
        match self.index.get::<T::Key>(row.key()) {
            Some(&pos) => Some(std::mem::replace(&mut self.rows[pos], row)),
            None => {
                self.index.insert(row.key().clone(), self.rows.len());
                self.rows.push(row);
                None
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.rows.iter_mut()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
