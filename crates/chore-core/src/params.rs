//! Parameter structures for todo operations.
//!
//! These carry raw, not-yet-validated values from an interface layer (the
//! CLI, a form, a test) into the core. Each interface converts its own
//! argument types into these with `From` impls, so the core stays free of
//! framework-specific derives.
//!
//! ```ignore
//! // In the CLI
//! impl From<AddArgs> for CreateTodo {
//!     fn from(val: AddArgs) -> Self {
//!         CreateTodo {
//!             title: val.title,
//!             due: val.due,
//!             category: Category::from_selection(val.category),
//!             priority: Priority::from_selection(val.priority),
//!             status: Status::Pending,
//!         }
//!     }
//! }
//! ```

use crate::models::{Category, Priority, Status};

/// Parameters for creating a new todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodo {
    /// Title, checked by [`crate::validation::validate_title`]
    pub title: String,
    /// Due date text in `YYYY-MM-DDTHH:MM[:SS]` form
    pub due: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
}

/// Parameters for editing an existing todo.
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: Option<String>,
    /// Due date text, checked against the update floor
    pub due: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl UpdateTodo {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.due.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}
