//! Tag input widget
//!
//! Draws the committed items as tokens followed by the entry field, and
//! the remaining vocabulary as a suggestion list underneath.

use crate::ui::ratatui_adapter::state::{AppState, Focus};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Tag list widget: tokens, entry field and suggestions
pub struct TagInput<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> TagInput<'a> {
    /// Create a new tag input widget
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Build the token line with the entry field at the end
    fn build_tokens(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, item) in self.state.list.items().iter().enumerate() {
            let style = if self.state.focus == Focus::Item(idx) {
                self.theme.focused_token_style()
            } else {
                self.theme.token_style()
            };
            spans.push(Span::styled(format!(" {} × ", item.value()), style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw(self.state.list.entry().to_string()));
        if self.state.focus == Focus::Entry {
            spans.push(Span::styled(
                " ",
                self.theme
                    .cursor_style()
                    .add_modifier(Modifier::REVERSED | Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }

    /// Build the suggestion list
    fn build_suggestions(&self, suggestions: &[&str]) -> Vec<ListItem<'static>> {
        suggestions
            .iter()
            .enumerate()
            .map(|(idx, suggestion)| {
                let is_selected = idx == self.state.suggestion_cursor;
                let style = if is_selected {
                    self.theme.cursor_style()
                } else {
                    self.theme.normal_style()
                };
                let prefix = if is_selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled((*suggestion).to_string(), style),
                ]))
            })
            .collect()
    }
}

impl Widget for TagInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let suggestions = self.state.suggestions();
        let show_suggestions = self.state.focus == Focus::Entry && !suggestions.is_empty();

        #[allow(clippy::cast_possible_truncation)]
        let suggestions_height = if show_suggestions {
            suggestions.len() as u16 + 2
        } else {
            0
        };
        let [input_area, suggestion_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(suggestions_height)])
                .areas(area);

        let title = match self.state.list.config().max_items {
            0 => format!(" {} ", self.state.prompt),
            max => format!(" {} ({}/{max}) ", self.state.prompt, self.state.list.len()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);
        Paragraph::new(self.build_tokens())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(input_area, buf);

        if show_suggestions {
            let total = self.state.list.allowed_values().len();
            let title = if suggestions.len() < total {
                format!(" Suggestions ({}/{total}) ", suggestions.len())
            } else {
                format!(" Suggestions ({total}) ")
            };
            List::new(self.build_suggestions(&suggestions))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.theme.border_style())
                        .title(title),
                )
                .render(suggestion_area, buf);
        }
    }
}
