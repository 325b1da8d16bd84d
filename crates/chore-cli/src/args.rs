//! Command-line argument definitions using clap.
//!
//! Each subcommand's arguments are a clap wrapper that converts into the
//! core's parameter types, keeping clap out of `chore-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TodoRecord
//! ```
//!
//! Menu selections (category, priority, status) are taken as numbers and
//! bounded by clap's range parsers before the core maps them to values.

use std::path::PathBuf;

use chore_core::{Category, CreateTodo, Priority, SortKey, Status, UpdateTodo};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// A small personal todo tracker backed by a plain text file
#[derive(Parser)]
#[command(version, about, name = "chore")]
pub struct Args {
    /// Path to the todo file. Defaults to $XDG_DATA_HOME/chore/todos.txt;
    /// `.txt` is appended when the name has no extension
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. With no command, `list` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// List all todos in file order
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Create a new todo (status starts as pending)
    #[command(alias = "a")]
    Add(AddArgs),
    /// Show one todo as a card
    #[command(alias = "s")]
    Show(PositionArgs),
    /// Change one or more fields of a todo
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Delete a todo
    #[command(aliases = ["d", "rm"])]
    Delete(PositionArgs),
    /// Reorder the todo file
    Sort(SortArgs),
}

#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Print the todos as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Create a new todo
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Title: 1-30 letters, digits, spaces or apostrophes, taken verbatim
    pub title: String,
    #[arg(short, long, help = "Due date and time, as YYYY-MM-DDTHH:MM (must be in the future)")]
    pub due: String,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=6),
        help = "Category: 1 red, 2 white, 3 blue, 4 purple, 5 yellow, 6 green"
    )]
    pub category: u8,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=3),
        help = "Priority: 1 low, 2 normal, 3 high"
    )]
    pub priority: u8,
}

impl From<AddArgs> for CreateTodo {
    fn from(val: AddArgs) -> Self {
        CreateTodo {
            title: val.title,
            due: val.due,
            category: Category::from_selection(val.category),
            priority: Priority::from_selection(val.priority),
            status: Status::Pending,
        }
    }
}

#[derive(ClapArgs)]
pub struct PositionArgs {
    #[arg(help = "Position of the todo as shown by `chore list`")]
    pub position: usize,
}

/// Change fields of an existing todo
#[derive(ClapArgs)]
pub struct UpdateArgs {
    #[arg(help = "Position of the todo as shown by `chore list`")]
    pub position: usize,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(
        short,
        long,
        help = "New due date, as YYYY-MM-DDTHH:MM (must be after 2021-05-06T09:00)"
    )]
    pub due: Option<String>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=6),
        help = "New category: 1 red, 2 white, 3 blue, 4 purple, 5 yellow, 6 green"
    )]
    pub category: Option<u8>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=3),
        help = "New priority: 1 low, 2 normal, 3 high"
    )]
    pub priority: Option<u8>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=4),
        help = "New status: 1 pending, 2 started, 3 partial, 4 completed"
    )]
    pub status: Option<u8>,
}

impl From<UpdateArgs> for UpdateTodo {
    fn from(val: UpdateArgs) -> Self {
        UpdateTodo {
            title: val.title,
            due: val.due,
            category: val.category.map(Category::from_selection),
            priority: val.priority.map(Priority::from_selection),
            status: val.status.map(Status::from_selection),
        }
    }
}

#[derive(ClapArgs)]
pub struct SortArgs {
    /// Field to order by
    #[arg(value_enum)]
    pub key: SortKeyArg,
}

/// Command-line representation of the sort keys
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    /// Earliest due date first
    Due,
    /// Low, normal, high
    Priority,
    /// Pending, started, partial, completed
    Status,
}

impl From<SortKeyArg> for SortKey {
    fn from(val: SortKeyArg) -> Self {
        match val {
            SortKeyArg::Due => SortKey::Due,
            SortKeyArg::Priority => SortKey::Priority,
            SortKeyArg::Status => SortKey::Status,
        }
    }
}
