//! Color categories and their display colors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Escape sequence that ends a colored span.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Color a UI uses to render a todo of a given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayColor {
    Red,
    White,
    Blue,
    Magenta,
    Yellow,
    Green,
}

impl DisplayColor {
    /// ANSI foreground escape for this color.
    pub fn ansi_escape(&self) -> &'static str {
        match self {
            DisplayColor::Red => "\x1b[0;31m",
            DisplayColor::White => "\x1b[0;37m",
            DisplayColor::Blue => "\x1b[0;34m",
            DisplayColor::Magenta => "\x1b[0;35m",
            DisplayColor::Yellow => "\x1b[0;33m",
            DisplayColor::Green => "\x1b[0;32m",
        }
    }
}

/// One of the six fixed color labels a todo is grouped by.
///
/// The declaration order is the order of the numbered selection menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Red,
    White,
    Blue,
    Purple,
    Yellow,
    Green,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 6] = [
        Category::Red,
        Category::White,
        Category::Blue,
        Category::Purple,
        Category::Yellow,
        Category::Green,
    ];

    /// Map a 1-based menu selection to a category.
    ///
    /// Selections are expected to be bounded by the caller. Anything that is
    /// not 1 through 5 falls through to the last category.
    ///
    /// ```rust
    /// use chore_core::Category;
    ///
    /// assert_eq!(Category::from_selection(3), Category::Blue);
    /// assert_eq!(Category::from_selection(6), Category::Green);
    /// ```
    pub fn from_selection(selection: u8) -> Self {
        match selection {
            1 => Category::Red,
            2 => Category::White,
            3 => Category::Blue,
            4 => Category::Purple,
            5 => Category::Yellow,
            _ => Category::Green,
        }
    }

    /// Canonical lowercase name, as written to the todo file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Red => "red",
            Category::White => "white",
            Category::Blue => "blue",
            Category::Purple => "purple",
            Category::Yellow => "yellow",
            Category::Green => "green",
        }
    }

    /// Display color associated with this category.
    pub fn color(&self) -> DisplayColor {
        match self {
            Category::Red => DisplayColor::Red,
            Category::White => DisplayColor::White,
            Category::Blue => DisplayColor::Blue,
            Category::Purple => DisplayColor::Magenta,
            Category::Yellow => DisplayColor::Yellow,
            Category::Green => DisplayColor::Green,
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Category::Red),
            "white" => Ok(Category::White),
            "blue" => Ok(Category::Blue),
            "purple" => Ok(Category::Purple),
            "yellow" => Ok(Category::Yellow),
            "green" => Ok(Category::Green),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}
