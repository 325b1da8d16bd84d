//! Core library for the chore todo tracker.
//!
//! This crate holds the todo model and everything with rules attached to it:
//! field validation, stable sorting, the flat-text file format, and the
//! human-readable rendering a UI shows. It performs no logging and, apart
//! from [`store`], no I/O.
//!
//! # Modules
//!
//! - [`models`]: [`TodoRecord`], [`TodoList`] and the closed value sets
//! - [`validation`]: title and due-date rules
//! - [`sort`]: stable orderings by due date, priority or status
//! - [`codec`]: `title,due_at,category,priority,status` lines
//! - [`display`]: cards, listings and operation results
//! - [`store`]: the todo file on disk
//!
//! # Quick Start
//!
//! ```rust
//! use chore_core::{Category, CreateTodo, Priority, SortKey, Status, TodoList, TodoRecord, codec};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut todos = TodoList::from(codec::load(
//!     "Buy milk,2030-01-01T09:00,blue,low,pending\n",
//! )?);
//!
//! let position = todos.push(TodoRecord::create(&CreateTodo {
//!     title: "Call Bob".to_string(),
//!     due: "2999-06-01T10:00".to_string(),
//!     category: Category::from_selection(1),
//!     priority: Priority::from_selection(3),
//!     status: Status::Pending,
//! })?);
//! assert_eq!(position, 2);
//!
//! todos.sort(SortKey::Priority);
//! let text = codec::save(todos.records());
//! assert!(text.starts_with("Buy milk,"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod sort;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, SortResult, TodoCard, Todos, UpdateResult};
pub use error::{Result, TodoError};
pub use models::{Category, DisplayColor, Priority, Status, TodoList, TodoRecord};
pub use params::{CreateTodo, UpdateTodo};
pub use sort::{SortKey, sort_by_due, sort_by_priority, sort_by_status};
pub use store::{TodoFile, TodoFileBuilder};
pub use validation::{DueDateMode, validate_due_date, validate_title};
