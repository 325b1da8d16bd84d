//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context: a full card for one todo, a numbered
//! listing, or the outcome of an operation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Card, Todos &  │    │    Formatted    │
//! │  (TodoRecord)   │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown. Color is never written here except by
//! [`Painted`]; everything else exposes a [`crate::DisplayColor`] and leaves
//! the tinting to the renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: numbered listings ([`Todos`], [`TodoEntry`])
//! - [`results`]: operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: reorder confirmation ([`SortResult`])
//! - [`datetime`]: canonical and human timestamp formats
//! - [`models`]: Display implementations for domain models, [`TodoCard`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use chore_core::{Category, Priority, Status, TodoRecord, display::format_record};
//! use jiff::civil::date;
//!
//! let todo = TodoRecord::restore(
//!     "Call Bob",
//!     date(2029, 6, 1).at(10, 0, 0, 0),
//!     Category::Red,
//!     Priority::High,
//!     Status::Started,
//! )
//! .unwrap();
//!
//! let card = format_record(&todo);
//! assert!(card.contains("Due on: Friday 1 of June 2029"));
//! assert!(card.contains("Due by: 10:00"));
//! assert!(card.contains("Category: red"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{TodoEntry, Todos};
pub use datetime::{CanonicalDateTime, DueDay, DueTime};
pub use models::{Painted, TodoCard, format_record};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::SortResult;
