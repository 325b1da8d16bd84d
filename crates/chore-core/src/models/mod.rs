//! Data models for todos.
//!
//! - [`TodoRecord`]: a single validated todo
//! - [`TodoList`]: the ordered collection a session works on
//! - [`Category`], [`Priority`], [`Status`]: the closed value sets a todo is
//!   tagged with
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use chore_core::{Category, CreateTodo, Priority, Status, TodoRecord};
//!
//! let todo = TodoRecord::create(&CreateTodo {
//!     title: "Water the plants".to_string(),
//!     due: "2999-01-01T09:00".to_string(),
//!     category: Category::Green,
//!     priority: Priority::Normal,
//!     status: Status::Pending,
//! })
//! .unwrap();
//!
//! println!("{}", todo); // Markdown block tagged with "green"
//! ```

pub mod category;
pub mod list;
pub mod record;
pub mod status;

#[cfg(test)]
mod tests;

pub use category::{ANSI_RESET, Category, DisplayColor};
pub use list::TodoList;
pub use record::TodoRecord;
pub use status::{Priority, Status};
