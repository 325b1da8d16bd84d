//! The todo record entity.

use jiff::civil::DateTime;
use serde::Serialize;

use super::{Category, Priority, Status};
use crate::{
    display::CanonicalDateTime,
    error::Result,
    params::{CreateTodo, UpdateTodo},
    validation::{self, DueDateMode},
};

/// A single todo entry.
///
/// Fields are private so a record can only hold validated values. A record
/// has no identity of its own; it is addressed by its position in a
/// [`super::TodoList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRecord {
    title: String,
    due_at: DateTime,
    category: Category,
    priority: Priority,
    status: Status,
}

impl TodoRecord {
    /// Create a new todo, checking the due date against the current time.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidField` if the title is invalid or the due
    /// date is not in the future, and `TodoError::UnparsableDate` if the due
    /// date text cannot be parsed.
    pub fn create(params: &CreateTodo) -> Result<Self> {
        validation::validate_title(&params.title)?;
        let due_at = validation::validate_due_date(&params.due, DueDateMode::New)?;
        Ok(Self::from_parts(params, due_at))
    }

    /// Same as [`TodoRecord::create`] with an explicit "now".
    pub fn create_at(params: &CreateTodo, now: DateTime) -> Result<Self> {
        validation::validate_title(&params.title)?;
        let due_at = validation::validate_due_date_at(&params.due, DueDateMode::New, now)?;
        Ok(Self::from_parts(params, due_at))
    }

    fn from_parts(params: &CreateTodo, due_at: DateTime) -> Self {
        Self {
            title: params.title.clone(),
            due_at,
            category: params.category,
            priority: params.priority,
            status: params.status,
        }
    }

    /// Rebuild a record that was persisted earlier.
    ///
    /// The title is checked and the due date must be whole seconds. The due
    /// date is not held to either floor, since it was validated when it was
    /// set and may have slipped into the past since.
    pub fn restore(
        title: &str,
        due_at: DateTime,
        category: Category,
        priority: Priority,
        status: Status,
    ) -> Result<Self> {
        validation::validate_title(title)?;
        let due_at = validation::validate_whole_seconds(due_at)?;
        Ok(Self {
            title: title.to_string(),
            due_at,
            category,
            priority,
            status,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_at(&self) -> DateTime {
        self.due_at
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Replace the title. The record is unchanged if the title is invalid.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        validation::validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    /// Replace the due date, checked against the update floor.
    pub fn set_due(&mut self, raw: &str) -> Result<()> {
        self.due_at = validation::validate_due_date(raw, DueDateMode::Update)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Apply every field of `update` at once.
    ///
    /// All supplied values are validated before any of them is written, so a
    /// failure leaves the record exactly as it was. Returns one description
    /// per field that was supplied.
    pub fn apply(&mut self, update: &UpdateTodo) -> Result<Vec<String>> {
        if let Some(title) = &update.title {
            validation::validate_title(title)?;
        }
        let due_at = update
            .due
            .as_deref()
            .map(|raw| validation::validate_due_date(raw, DueDateMode::Update))
            .transpose()?;

        let mut changes = Vec::new();

        if let Some(title) = &update.title {
            changes.push(format!("Title: '{}' -> '{title}'", self.title));
            self.title = title.clone();
        }
        if let Some(due_at) = due_at {
            changes.push(format!(
                "Due: {} -> {}",
                CanonicalDateTime(&self.due_at),
                CanonicalDateTime(&due_at)
            ));
            self.due_at = due_at;
        }
        if let Some(category) = update.category {
            changes.push(format!("Category: {} -> {category}", self.category));
            self.category = category;
        }
        if let Some(priority) = update.priority {
            changes.push(format!("Importance: {} -> {priority}", self.priority));
            self.priority = priority;
        }
        if let Some(status) = update.status {
            changes.push(format!("Status: {} -> {status}", self.status));
            self.status = status;
        }

        Ok(changes)
    }
}
