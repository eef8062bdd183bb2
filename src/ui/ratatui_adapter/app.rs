//! Ratatui-based tag list front-end
//!
//! Runs an interactive terminal session around a [`TagList`] and returns
//! the committed values when the user finishes.

use super::events::{EventResult, poll_and_handle};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{HelpBar, StatusBar, TagInput};
use crate::taglist::TagList;
use crate::ui::error::Result;
use crate::ui::output::StatusPresenter;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive terminal front-end for a tag list
pub struct TagListApp {
    theme: Theme,
    prompt: String,
}

impl TagListApp {
    /// Create a new app with the default theme
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            theme: Theme::default(),
            prompt: prompt.into(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the interactive session
    ///
    /// Returns the final values, or `None` if the user aborted.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&self, list: TagList<StatusPresenter>) -> Result<Option<Vec<String>>> {
        let mut terminal = Self::setup_terminal()?;
        let mut state = AppState::new(list, self.prompt.clone());

        let outcome = self.event_loop(&mut terminal, &mut state);
        let cleanup = Self::cleanup_terminal();

        let outcome = outcome?;
        cleanup?;
        Ok(outcome)
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<Option<Vec<String>>> {
        loop {
            terminal.draw(|frame| self.render(frame, state))?;

            match poll_and_handle(state, POLL_INTERVAL)? {
                EventResult::Done => {
                    tracing::debug!(count = state.list.len(), "tag list session finished");
                    return Ok(Some(state.list.values()));
                }
                EventResult::Abort => {
                    tracing::debug!("tag list session aborted");
                    return Ok(None);
                }
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &AppState) {
        let [input_area, status_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(TagInput::new(state, &self.theme), input_area);

        let message = state.list.presenter().latest_message();
        let summary = summary(state);
        frame.render_widget(
            StatusBar::new(message.as_ref(), &summary, &self.theme),
            status_area,
        );

        frame.render_widget(HelpBar::new(&state.hints, &self.theme), help_area);
    }
}

/// Item count summary for the status bar
fn summary(state: &AppState) -> String {
    let list = &state.list;
    let mut text = match list.config().max_items {
        0 => format!("{} items", list.len()),
        max => format!("{}/{max} items", list.len()),
    };
    if !list.allowed_values().is_empty() {
        text.push_str(&format!(", {} available", list.allowed_values().len()));
    }
    text
}
