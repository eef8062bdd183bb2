//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used by the tag list widgets.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for item tokens
    pub token_bg: Color,
    /// Foreground color for item tokens
    pub token_fg: Color,
    /// Background color for the focused token
    pub focused_token_bg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            token_bg: Color::DarkGray,
            token_fg: Color::White,
            focused_token_bg: Color::Cyan,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Create a light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            token_bg: Color::Gray,
            token_fg: Color::Black,
            focused_token_bg: Color::Blue,
            cursor: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,
            info: Color::Blue,
            border: Color::Gray,
            dimmed: Color::Gray,
        }
    }

    /// Style for an item token
    #[must_use]
    pub fn token_style(&self) -> Style {
        Style::default().bg(self.token_bg).fg(self.token_fg)
    }

    /// Style for the focused item token
    #[must_use]
    pub fn focused_token_style(&self) -> Style {
        Style::default()
            .bg(self.focused_token_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unstyled text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
