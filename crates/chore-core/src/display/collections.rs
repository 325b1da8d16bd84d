//! Collection wrapper types for displaying groups of todos.

use std::fmt;

use crate::models::TodoRecord;

/// One numbered entry of a todo listing.
pub struct TodoEntry<'a> {
    pub position: usize,
    pub todo: &'a TodoRecord,
}

impl fmt::Display for TodoEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.todo.fmt_entry(f, Some(self.position))
    }
}

/// Newtype wrapper for displaying a numbered list of todos.
///
/// Positions start at 1 and follow slice order. An empty slice formats as
/// `No todos found.`
///
/// # Examples
///
/// ```rust
/// use chore_core::display::Todos;
///
/// let output = format!("{}", Todos(&[]));
/// assert_eq!(output, "No todos found.\n");
/// ```
pub struct Todos<'a>(pub &'a [TodoRecord]);

impl<'a> Todos<'a> {
    /// Numbered entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = TodoEntry<'a>> + 'a {
        let todos: &'a [TodoRecord] = self.0;
        todos
            .iter()
            .enumerate()
            .map(|(index, todo)| TodoEntry {
                position: index + 1,
                todo,
            })
    }
}

impl fmt::Display for Todos<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No todos found.")
        } else {
            for entry in self.entries() {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}
