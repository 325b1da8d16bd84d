//! Confirmation message for a reorder.

use std::fmt;

use crate::sort::SortKey;

/// Result of sorting a list. Only the count is shown, not the list.
pub struct SortResult {
    pub key: SortKey,
    pub count: usize,
}

impl SortResult {
    pub fn new(key: SortKey, count: usize) -> Self {
        Self { key, count }
    }
}

impl fmt::Display for SortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            0 => writeln!(f, "Nothing to sort."),
            1 => writeln!(f, "Sorted 1 todo by {}", self.key.as_str()),
            n => writeln!(f, "Sorted {n} todos by {}", self.key.as_str()),
        }
    }
}
