//! Ordered collection of todos.

use super::TodoRecord;
use crate::{
    error::{Result, TodoError},
    sort::SortKey,
};

/// Insertion-ordered list of todos, addressed by 1-based position.
///
/// Positions are only meaningful until the list is next sorted or shortened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList(Vec<TodoRecord>);

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoRecord> {
        self.0.iter()
    }

    /// The records in their current order.
    pub fn records(&self) -> &[TodoRecord] {
        &self.0
    }

    /// Append a record and return its 1-based position.
    pub fn push(&mut self, record: TodoRecord) -> usize {
        self.0.push(record);
        self.0.len()
    }

    /// Get the record at a 1-based position.
    pub fn get(&self, position: usize) -> Result<&TodoRecord> {
        let index = self.index_of(position)?;
        Ok(&self.0[index])
    }

    /// Get the record at a 1-based position for editing.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut TodoRecord> {
        let index = self.index_of(position)?;
        Ok(&mut self.0[index])
    }

    /// Remove and return the record at a 1-based position.
    pub fn remove(&mut self, position: usize) -> Result<TodoRecord> {
        let index = self.index_of(position)?;
        Ok(self.0.remove(index))
    }

    /// Reorder the list in place by `key`.
    pub fn sort(&mut self, key: SortKey) {
        key.apply(&mut self.0);
    }

    pub fn into_vec(self) -> Vec<TodoRecord> {
        self.0
    }

    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.0.len() {
            return Err(TodoError::PositionOutOfRange {
                position,
                len: self.0.len(),
            });
        }
        Ok(position - 1)
    }
}

impl From<Vec<TodoRecord>> for TodoList {
    fn from(records: Vec<TodoRecord>) -> Self {
        Self(records)
    }
}

impl IntoIterator for TodoList {
    type Item = TodoRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRecord;
    type IntoIter = std::slice::Iter<'a, TodoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
