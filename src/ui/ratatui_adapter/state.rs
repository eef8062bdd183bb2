//! Application state for the ratatui front-end

use crate::taglist::{Mode, RejectReason, Signal, TagList, Transition};
use crate::ui::output::{MessageLevel, StatusPresenter};
use crate::ui::ratatui_adapter::widgets::KeyHint;

/// Maximum number of suggestions shown under the entry field
pub const SUGGESTION_LIMIT: usize = 8;

/// Which part of the widget has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The entry field
    Entry,
    /// The item token at this index
    Item(usize),
}

/// State of the running TUI
#[derive(Debug)]
pub struct AppState {
    /// The tag list being edited
    pub list: TagList<StatusPresenter>,
    /// Current keyboard focus
    pub focus: Focus,
    /// Highlighted suggestion
    pub suggestion_cursor: usize,
    /// Prompt shown as the widget title
    pub prompt: String,
    /// Keybind hints for the help bar
    pub hints: Vec<KeyHint>,
}

impl AppState {
    /// Create state around an existing tag list
    #[must_use]
    pub fn new(list: TagList<StatusPresenter>, prompt: impl Into<String>) -> Self {
        let hints = Self::build_hints(&list);
        Self {
            list,
            focus: Focus::Entry,
            suggestion_cursor: 0,
            prompt: prompt.into(),
            hints,
        }
    }

    fn build_hints(list: &TagList<StatusPresenter>) -> Vec<KeyHint> {
        let mut hints = Vec::new();
        if list.mode() == Mode::FreeForm {
            hints.push(KeyHint::new("Enter", "add"));
        }
        hints.push(KeyHint::new("BS", "remove last"));
        hints.push(KeyHint::new("←", "select item"));
        if !list.allowed_values().is_empty() {
            hints.push(KeyHint::new("TAB", "pick suggestion"));
        }
        if list.config().reorder_enabled {
            hints.push(KeyHint::new("alt+←/→", "move item"));
        }
        hints.push(KeyHint::new("ESC", "done"));
        hints.push(KeyHint::new("ctrl+c", "abort"));
        hints
    }

    /// Feed a signal to the tag list and report the outcome in the status bar
    pub fn send(&mut self, signal: Signal) -> Transition {
        let transition = self.list.handle(signal);
        if let Transition::Rejected(reason) = &transition {
            self.report_rejection(*reason);
        }
        self.clamp_suggestion_cursor();
        transition
    }

    /// Show why a value was not added
    pub fn report_rejection(&mut self, reason: RejectReason) {
        let level = match reason {
            RejectReason::MaxItemsReached => MessageLevel::Warning,
            RejectReason::DuplicateNotAllowed | RejectReason::NotAllowed => MessageLevel::Error,
        };
        self.list
            .presenter_mut()
            .push(level, format!("Not added: {reason}"));
    }

    /// Suggestions for the current entry text
    #[must_use]
    pub fn suggestions(&self) -> Vec<&str> {
        self.list.suggestions(SUGGESTION_LIMIT)
    }

    /// The highlighted suggestion, if any
    #[must_use]
    pub fn selected_suggestion(&self) -> Option<String> {
        self.suggestions()
            .get(self.suggestion_cursor)
            .map(|s| (*s).to_string())
    }

    /// Move suggestion cursor up (wraps)
    pub fn suggestion_up(&mut self) {
        let count = self.suggestions().len();
        if self.suggestion_cursor > 0 {
            self.suggestion_cursor -= 1;
        } else if count > 0 {
            self.suggestion_cursor = count - 1;
        }
    }

    /// Move suggestion cursor down (wraps)
    pub fn suggestion_down(&mut self) {
        let count = self.suggestions().len();
        if self.suggestion_cursor + 1 < count {
            self.suggestion_cursor += 1;
        } else {
            self.suggestion_cursor = 0;
        }
    }

    fn clamp_suggestion_cursor(&mut self) {
        if self.suggestion_cursor >= self.suggestions().len() {
            self.suggestion_cursor = 0;
        }
    }

    /// Move focus to the last item, leaving the entry field
    pub fn focus_items(&mut self) {
        if self.list.is_empty() {
            return;
        }
        if self.focus == Focus::Entry {
            self.send(Signal::FocusLost);
        }
        self.focus = Focus::Item(self.list.len() - 1);
    }

    /// Move item focus left
    pub fn focus_left(&mut self) {
        match self.focus {
            Focus::Entry => self.focus_items(),
            Focus::Item(i) => self.focus = Focus::Item(i.saturating_sub(1)),
        }
    }

    /// Move item focus right, returning to the entry field after the last item
    pub fn focus_right(&mut self) {
        if let Focus::Item(i) = self.focus {
            self.focus = if i + 1 < self.list.len() {
                Focus::Item(i + 1)
            } else {
                Focus::Entry
            };
        }
    }

    /// Delete the focused item
    pub fn delete_focused(&mut self) {
        if let Focus::Item(i) = self.focus {
            self.list.delete_at(i);
            self.focus = if self.list.is_empty() {
                Focus::Entry
            } else {
                Focus::Item(i.min(self.list.len() - 1))
            };
        }
    }

    /// Move the focused item one step; focus follows the item
    pub fn move_focused(&mut self, forward: bool) {
        let Focus::Item(i) = self.focus else {
            return;
        };
        if !self.list.config().reorder_enabled {
            self.list
                .presenter_mut()
                .push(MessageLevel::Warning, "Reordering is disabled");
            return;
        }
        let target = if forward {
            i + 1
        } else if i > 0 {
            i - 1
        } else {
            return;
        };
        if self.list.move_item(i, target) {
            self.focus = Focus::Item(target);
        }
    }
}
