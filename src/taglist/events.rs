//! Event routing for the entry field
//!
//! Maps raw input signals onto commits, deletes and buffer clears. The
//! entry field always sits after the last item, so a Backspace in an
//! empty field removes the last item.

use super::{CommitResult, Item, ItemId, Mode, RejectReason, TagList};
use crate::ui::Presenter;
use tracing::{trace, warn};

/// Keys the router distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Backspace
    Backspace,
    /// Enter / Return
    Enter,
    /// A printable character
    Char(char),
    /// Any other key
    Other,
}

/// Raw input signal from the entry field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The entry text changed (typing or picking a suggestion)
    TextChanged(String),
    /// A key went down, before the text changes
    KeyPressed(Key),
    /// The entry field lost focus
    FocusLost,
}

/// State of the entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Buffer empty
    Idle,
    /// Buffer holds uncommitted text
    Typing,
}

/// What a signal did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The buffer was committed as a new item
    Committed(ItemId),
    /// A commit was attempted and rejected
    Rejected(RejectReason),
    /// The item before the entry field was deleted
    Deleted(Item),
    /// The buffer was discarded
    Cleared,
    /// The buffer changed without a commit
    BufferUpdated,
    /// Nothing happened
    Ignored,
}

impl From<CommitResult> for Transition {
    fn from(result: CommitResult) -> Self {
        match result {
            CommitResult::Committed(id) => Self::Committed(id),
            CommitResult::Rejected(reason) => Self::Rejected(reason),
        }
    }
}

impl<P: Presenter> TagList<P> {
    /// Current entry field state
    #[must_use]
    pub fn entry_state(&self) -> EntryState {
        if self.entry.is_empty() {
            EntryState::Idle
        } else {
            EntryState::Typing
        }
    }

    /// Route one input signal
    pub fn handle(&mut self, signal: Signal) -> Transition {
        trace!(?signal, "handling signal");
        match signal {
            Signal::TextChanged(text) => self.on_text_changed(text),
            Signal::KeyPressed(key) => self.on_key_pressed(key),
            Signal::FocusLost => self.on_focus_lost(),
        }
    }

    fn on_text_changed(&mut self, text: String) -> Transition {
        self.entry = text;
        if self.buffer_is_allowed() {
            let candidate = self.entry.clone();
            return self.commit(&candidate).into();
        }
        Transition::BufferUpdated
    }

    fn on_key_pressed(&mut self, key: Key) -> Transition {
        if self.entry.is_empty()
            && key == Key::Backspace
            && let Some(id) = self.last_item().map(Item::id)
        {
            return self
                .delete(id)
                .map_or(Transition::Ignored, Transition::Deleted);
        }

        let candidate = self.entry.clone();
        let mode = self.mode;
        match mode {
            Mode::ClosedVocabulary if self.buffer_is_allowed() => self.commit(&candidate).into(),
            Mode::FreeForm if !candidate.is_empty() && key == Key::Enter => {
                self.commit(&candidate).into()
            }
            _ => Transition::Ignored,
        }
    }

    fn on_focus_lost(&mut self) -> Transition {
        self.entry.clear();
        if let Err(e) = self.presenter.entry_cleared() {
            warn!(error = %e, "presenter failed to clear entry");
        }
        Transition::Cleared
    }

    fn buffer_is_allowed(&self) -> bool {
        self.mode == Mode::ClosedVocabulary && self.pool.contains(&self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{Seed, VocabularyEntry};
    use crate::taglist::TagListConfig;
    use crate::ui::mock::{RecordingPresenter, RenderRequest};

    fn closed(vocab: &[&str]) -> TagList {
        let entries = vocab.iter().map(|v| VocabularyEntry::new(*v)).collect();
        TagList::with_seed(TagListConfig::default(), Seed::Vocabulary(entries))
    }

    fn free(values: &[&str]) -> TagList {
        let values = values.iter().map(|v| (*v).to_string()).collect();
        TagList::with_seed(TagListConfig::default(), Seed::Values(values))
    }

    fn type_text<P: Presenter>(list: &mut TagList<P>, text: &str) -> Transition {
        list.handle(Signal::TextChanged(text.to_string()))
    }

    #[test]
    fn test_text_matching_allowed_value_commits() {
        let mut list = closed(&["red", "green"]);
        let result = type_text(&mut list, "red");
        assert!(matches!(result, Transition::Committed(_)));
        assert_eq!(list.values(), vec!["red"]);
        assert_eq!(list.allowed_values(), ["green"]);
        assert_eq!(list.entry(), "");
        assert_eq!(list.entry_state(), EntryState::Idle);
    }

    #[test]
    fn test_partial_text_does_not_commit() {
        let mut list = closed(&["red", "green"]);
        assert_eq!(type_text(&mut list, "re"), Transition::BufferUpdated);
        assert_eq!(list.entry(), "re");
        assert_eq!(list.entry_state(), EntryState::Typing);
        assert!(list.is_empty());
    }

    #[test]
    fn test_free_form_text_never_auto_commits() {
        let mut list = free(&[]);
        assert_eq!(type_text(&mut list, "red"), Transition::BufferUpdated);
        assert!(list.is_empty());
    }

    #[test]
    fn test_enter_commits_free_form() {
        let mut list = free(&[]);
        type_text(&mut list, "hello");
        let result = list.handle(Signal::KeyPressed(Key::Enter));
        assert!(matches!(result, Transition::Committed(_)));
        assert_eq!(list.values(), vec!["hello"]);
        assert_eq!(list.entry(), "");
    }

    #[test]
    fn test_other_keys_do_not_commit_free_form() {
        let mut list = free(&[]);
        type_text(&mut list, "hello");
        assert_eq!(list.handle(Signal::KeyPressed(Key::Char('x'))), Transition::Ignored);
        assert_eq!(list.handle(Signal::KeyPressed(Key::Other)), Transition::Ignored);
        assert!(list.is_empty());
    }

    #[test]
    fn test_enter_on_empty_buffer_ignored() {
        let mut list = free(&["x"]);
        assert_eq!(list.handle(Signal::KeyPressed(Key::Enter)), Transition::Ignored);
        assert_eq!(list.values(), vec!["x"]);
    }

    #[test]
    fn test_rejected_enter_keeps_buffer() {
        let mut list = free(&["x"]);
        type_text(&mut list, "x");
        let result = list.handle(Signal::KeyPressed(Key::Enter));
        assert_eq!(result, Transition::Rejected(RejectReason::DuplicateNotAllowed));
        assert_eq!(list.entry(), "x");
        assert_eq!(list.values(), vec!["x"]);
    }

    #[test]
    fn test_backspace_on_empty_buffer_deletes_last() {
        let mut list = free(&["x", "y"]);
        let result = list.handle(Signal::KeyPressed(Key::Backspace));
        let Transition::Deleted(item) = result else {
            panic!("expected a delete, got {result:?}");
        };
        assert_eq!(item.value(), "y");
        assert_eq!(list.values(), vec!["x"]);
    }

    #[test]
    fn test_backspace_with_text_does_not_delete() {
        let mut list = free(&["x", "y"]);
        type_text(&mut list, "z");
        assert_eq!(list.handle(Signal::KeyPressed(Key::Backspace)), Transition::Ignored);
        assert_eq!(list.values(), vec!["x", "y"]);
    }

    #[test]
    fn test_backspace_with_no_items_ignored() {
        let mut list = free(&[]);
        assert_eq!(list.handle(Signal::KeyPressed(Key::Backspace)), Transition::Ignored);
    }

    #[test]
    fn test_backspace_restores_pool() {
        let mut list = closed(&["red", "green"]);
        type_text(&mut list, "green");
        list.handle(Signal::KeyPressed(Key::Backspace));
        assert!(list.is_empty());
        assert_eq!(list.allowed_values(), ["green", "red"]);
    }

    #[test]
    fn test_any_key_commits_allowed_buffer_in_closed_mode() {
        // A rejected text change leaves the buffer holding an allowed value
        let entries = vec![VocabularyEntry::new("red"), VocabularyEntry::new("green")];
        let mut list = TagList::with_seed(
            TagListConfig::default().with_allow_duplicates(true).with_max_items(1),
            Seed::Vocabulary(entries),
        );
        type_text(&mut list, "red");
        assert_eq!(
            type_text(&mut list, "green"),
            Transition::Rejected(RejectReason::MaxItemsReached)
        );
        assert_eq!(list.entry(), "green");
        assert_eq!(
            list.handle(Signal::KeyPressed(Key::Char('x'))),
            Transition::Rejected(RejectReason::MaxItemsReached)
        );

        list.delete_at(0);
        assert!(matches!(
            list.handle(Signal::KeyPressed(Key::Other)),
            Transition::Committed(_)
        ));
        assert_eq!(list.values(), vec!["green"]);
    }

    #[test]
    fn test_focus_lost_clears_without_commit() {
        let mut list = free(&[]);
        type_text(&mut list, "draft");
        assert_eq!(list.handle(Signal::FocusLost), Transition::Cleared);
        assert_eq!(list.entry(), "");
        assert!(list.is_empty());
    }

    #[test]
    fn test_focus_lost_requests_entry_cleared() {
        let mut list = TagList::new(
            TagListConfig::default(),
            Seed::default(),
            RecordingPresenter::default(),
        );
        type_text(&mut list, "x");
        assert_eq!(list.handle(Signal::FocusLost), Transition::Cleared);
        assert_eq!(list.presenter().requests, vec![RenderRequest::EntryCleared]);
    }

    #[test]
    fn test_focus_lost_clears_when_presenter_fails() {
        let mut list = TagList::new(
            TagListConfig::default(),
            Seed::default(),
            RecordingPresenter::failing(),
        );
        type_text(&mut list, "x");
        assert_eq!(list.handle(Signal::FocusLost), Transition::Cleared);
        assert_eq!(list.entry(), "");
        assert!(list.is_empty());
        assert_eq!(list.presenter().requests, vec![RenderRequest::EntryCleared]);
    }
}
