//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper formats a confirmation line followed by the affected todo.

use std::fmt;

use super::models::TodoCard;
use crate::models::{DisplayColor, TodoRecord};

/// Result of adding a todo to a list.
///
/// # Examples
///
/// ```rust
/// use chore_core::{Category, Priority, Status, TodoRecord, display::CreateResult};
/// use jiff::civil::date;
///
/// let todo = TodoRecord::restore(
///     "Call Bob",
///     date(2029, 6, 1).at(10, 0, 0, 0),
///     Category::Red,
///     Priority::High,
///     Status::Pending,
/// )
/// .unwrap();
///
/// let result = CreateResult::new(3, &todo);
/// assert!(result.to_string().starts_with("Created todo #3"));
/// ```
pub struct CreateResult<'a> {
    pub position: usize,
    pub todo: &'a TodoRecord,
}

impl<'a> CreateResult<'a> {
    pub fn new(position: usize, todo: &'a TodoRecord) -> Self {
        Self { position, todo }
    }

    pub fn color(&self) -> DisplayColor {
        self.todo.category().color()
    }
}

impl fmt::Display for CreateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created todo #{}", self.position)?;
        writeln!(f)?;
        write!(f, "{}", TodoCard(self.todo))
    }
}

/// Result of editing a todo, with the list of changes made.
pub struct UpdateResult<'a> {
    pub position: usize,
    pub todo: &'a TodoRecord,
    pub changes: Vec<String>,
}

impl<'a> UpdateResult<'a> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(position: usize, todo: &'a TodoRecord, changes: Vec<String>) -> Self {
        Self {
            position,
            todo,
            changes,
        }
    }

    pub fn color(&self) -> DisplayColor {
        self.todo.category().color()
    }
}

impl fmt::Display for UpdateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated todo #{}", self.position)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", TodoCard(self.todo))
    }
}

/// Result of removing a todo from a list.
pub struct DeleteResult {
    pub position: usize,
    pub todo: TodoRecord,
}

impl DeleteResult {
    pub fn new(position: usize, todo: TodoRecord) -> Self {
        Self { position, todo }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted todo #{} '{}'",
            self.position,
            self.todo.title()
        )
    }
}
