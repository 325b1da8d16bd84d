//! Stable orderings over todo collections.
//!
//! Every sort here reorders the slice in place and hands the same slice
//! back. Records that compare equal keep their relative order.

use std::str::FromStr;

use crate::models::TodoRecord;

/// Order by due date, earliest first.
pub fn sort_by_due(records: &mut [TodoRecord]) -> &mut [TodoRecord] {
    records.sort_by_key(TodoRecord::due_at);
    records
}

/// Order by priority: low, normal, high.
pub fn sort_by_priority(records: &mut [TodoRecord]) -> &mut [TodoRecord] {
    records.sort_by_key(TodoRecord::priority);
    records
}

/// Order by status: pending, started, partial, completed.
pub fn sort_by_status(records: &mut [TodoRecord]) -> &mut [TodoRecord] {
    records.sort_by_key(TodoRecord::status);
    records
}

/// Which field a collection is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Due,
    Priority,
    Status,
}

impl SortKey {
    /// Sort `records` in place by this key.
    pub fn apply(self, records: &mut [TodoRecord]) -> &mut [TodoRecord] {
        match self {
            SortKey::Due => sort_by_due(records),
            SortKey::Priority => sort_by_priority(records),
            SortKey::Status => sort_by_status(records),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Due => "due",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "due" => Ok(SortKey::Due),
            "priority" | "importance" => Ok(SortKey::Priority),
            "status" => Ok(SortKey::Status),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}
