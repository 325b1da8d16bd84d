//! Terminal rendering module for rich markdown output
//!
//! Plain messages go through termimad. Todo cards and results are tinted
//! line by line with their category's ANSI color instead, so the color tag
//! the core attaches survives to the terminal.

use anyhow::Result;
use chore_core::{DisplayColor, models::ANSI_RESET};
use termimad::{MadSkin, crossterm::style::Color};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}{ANSI_RESET}");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render markdown belonging to one todo in that todo's color
    pub fn render_tinted(&self, markdown: &str, color: DisplayColor) -> Result<()> {
        print!("{}", self.tint(markdown, color));
        Ok(())
    }

    fn tint(&self, markdown: &str, color: DisplayColor) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        markdown
            .lines()
            .map(|line| {
                if line.is_empty() {
                    "\n".to_string()
                } else {
                    format!("{}{line}{ANSI_RESET}\n", color.ansi_escape())
                }
            })
            .collect()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
