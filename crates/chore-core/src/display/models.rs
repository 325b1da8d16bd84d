//! Display implementations for domain models.
//!
//! - `TodoRecord` formats as a compact markdown block whose header carries
//!   the category name
//! - [`TodoCard`] is the full, human-readable card for a single todo
//! - [`Painted`] wraps a record in its category's ANSI color

use std::fmt;

use super::datetime::{CanonicalDateTime, DueDay, DueTime};
use crate::models::{ANSI_RESET, Category, DisplayColor, Priority, Status, TodoRecord};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TodoRecord {
    /// Compact entry format, optionally numbered with a 1-based position.
    pub(crate) fn fmt_entry(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(position) => writeln!(f, "### {position}. {} ({})", self.title(), self.category())?,
            None => writeln!(f, "### {} ({})", self.title(), self.category())?,
        }
        writeln!(f)?;
        writeln!(f, "- Due: {}", CanonicalDateTime(&self.due_at()))?;
        writeln!(f, "- Importance: {}", self.priority())?;
        writeln!(f, "- Status: {}", self.status())?;
        writeln!(f)
    }
}

impl fmt::Display for TodoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_entry(f, None)
    }
}

/// Full card for one todo, with human-readable due day and time.
///
/// The card names its category, and [`TodoCard::color`] hands the matching
/// [`DisplayColor`] to whatever renders it.
///
/// # Examples
///
/// ```rust
/// use chore_core::{Category, Priority, Status, TodoRecord, display::TodoCard};
/// use jiff::civil::date;
///
/// let todo = TodoRecord::restore(
///     "Buy milk",
///     date(2030, 1, 1).at(9, 0, 0, 0),
///     Category::Blue,
///     Priority::Low,
///     Status::Pending,
/// )
/// .unwrap();
///
/// let card = TodoCard(&todo);
/// assert!(card.to_string().contains("Due on: Tuesday 1 of January 2030"));
/// ```
pub struct TodoCard<'a>(pub &'a TodoRecord);

impl TodoCard<'_> {
    pub fn color(&self) -> DisplayColor {
        self.0.category().color()
    }
}

impl fmt::Display for TodoCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let todo = self.0;
        let due = todo.due_at();

        writeln!(f, "## {}", todo.title())?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", todo.category())?;
        writeln!(f, "- Due on: {}", DueDay(&due))?;
        writeln!(f, "- Due by: {}", DueTime(&due))?;
        writeln!(f, "- Importance: {}", todo.priority())?;
        writeln!(f, "- Status: {}", todo.status())
    }
}

/// Render a todo as a card. Same as formatting [`TodoCard`].
pub fn format_record(todo: &TodoRecord) -> String {
    TodoCard(todo).to_string()
}

/// A todo wrapped in its category's ANSI color escape.
pub struct Painted<'a>(pub &'a TodoRecord);

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{ANSI_RESET}",
            self.0.category().color().ansi_escape(),
            self.0
        )
    }
}
