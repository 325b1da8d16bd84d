//! Priority and completion status enumerations.
//!
//! Both enums derive `Ord` from their declaration order, which is also the
//! sort rank used by [`crate::sort`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How important a todo is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    /// All priorities in menu order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    /// Map a 1-based menu selection to a priority, defaulting to `High`.
    pub fn from_selection(selection: u8) -> Self {
        match selection {
            1 => Priority::Low,
            2 => Priority::Normal,
            _ => Priority::High,
        }
    }

    /// Canonical lowercase name, as written to the todo file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// How far along a todo is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not started yet
    #[default]
    Pending,

    /// Work has begun
    Started,

    /// Partly done
    Partial,

    /// Finished
    Completed,
}

impl Status {
    /// All statuses in menu order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Started,
        Status::Partial,
        Status::Completed,
    ];

    /// Map a 1-based menu selection to a status, defaulting to `Completed`.
    pub fn from_selection(selection: u8) -> Self {
        match selection {
            1 => Status::Pending,
            2 => Status::Started,
            3 => Status::Partial,
            _ => Status::Completed,
        }
    }

    /// Canonical lowercase name, as written to the todo file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Started => "started",
            Status::Partial => "partial",
            Status::Completed => "completed",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "started" => Ok(Status::Started),
            "partial" => Ok(Status::Partial),
            "completed" => Ok(Status::Completed),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}
