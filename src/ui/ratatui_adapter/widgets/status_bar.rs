//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and item counts
pub struct StatusBar<'a> {
    /// Latest message, if any
    message: Option<&'a (MessageLevel, String)>,
    /// Summary shown on the right (e.g., "3/5 items")
    summary: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a (MessageLevel, String)>,
        summary: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            summary,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style())
            .title_bottom(Line::from(self.summary).right_aligned());

        let line = match self.message {
            Some((level, text)) => {
                let style = self.style_for_level(*level);
                Line::from(vec![
                    Span::styled(Self::prefix_for_level(*level), style),
                    Span::styled(text.as_str(), style),
                ])
            }
            None => Line::from(Span::styled("", self.theme.dimmed_style())),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
