//! Event handling for the ratatui TUI
//!
//! Translates crossterm key events into tag list signals. Like a browser
//! text field, a printable key is reported as a key press first and then
//! as a text change.

use super::state::{AppState, Focus};
use crate::taglist::{Key, Signal, Transition};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Finish and report the current values
    Done,
    /// Exit without reporting values
    Abort,
    /// No action taken
    Ignored,
}

/// Map a crossterm key code to a router key
#[must_use]
pub const fn router_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Handle a key press while the entry field has focus
fn handle_entry(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => EventResult::Done,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,

        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.send(Signal::TextChanged(String::new()));
            EventResult::Continue
        }

        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.send(Signal::KeyPressed(Key::Char(c)));
            let mut text = state.list.entry().to_string();
            text.push(c);
            state.send(Signal::TextChanged(text));
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            let transition = state.send(Signal::KeyPressed(Key::Backspace));
            if matches!(transition, Transition::Committed(_) | Transition::Deleted(_)) {
                return EventResult::Continue;
            }
            let mut text = state.list.entry().to_string();
            if text.pop().is_some() {
                state.send(Signal::TextChanged(text));
            }
            EventResult::Continue
        }

        (KeyCode::Tab, _) => match state.selected_suggestion() {
            Some(suggestion) => {
                state.send(Signal::TextChanged(suggestion));
                EventResult::Continue
            }
            None => EventResult::Ignored,
        },
        (KeyCode::Up, _) => {
            state.suggestion_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.suggestion_down();
            EventResult::Continue
        }

        (KeyCode::Left, _) if state.list.entry().is_empty() && !state.list.is_empty() => {
            state.focus_items();
            EventResult::Continue
        }

        (code, _) => match state.send(Signal::KeyPressed(router_key(code))) {
            Transition::Ignored => EventResult::Ignored,
            _ => EventResult::Continue,
        },
    }
}

/// Handle a key press while an item token has focus
fn handle_item(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Left, KeyModifiers::ALT) => {
            state.move_focused(false);
            EventResult::Continue
        }
        (KeyCode::Right, KeyModifiers::ALT) => {
            state.move_focused(true);
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.focus_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.focus_right();
            EventResult::Continue
        }
        (KeyCode::Delete | KeyCode::Backspace, _) => {
            state.delete_focused();
            EventResult::Continue
        }
        (KeyCode::Esc | KeyCode::Enter, _) => {
            state.focus = Focus::Entry;
            EventResult::Continue
        }
        (KeyCode::Char(_), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.focus = Focus::Entry;
            handle_entry(state, key)
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a single key event
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    match state.focus {
        Focus::Entry => handle_entry(state, key),
        Focus::Item(_) => handle_item(state, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::FocusLost if state.focus == Focus::Entry => {
            state.send(Signal::FocusLost);
            EventResult::Continue
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{Seed, VocabularyEntry};
    use crate::taglist::{TagList, TagListConfig};
    use crate::ui::output::StatusPresenter;

    fn make_state(seed: Seed, config: TagListConfig) -> AppState {
        AppState::new(TagList::new(config, seed, StatusPresenter::new()), "Tags")
    }

    fn free_state() -> AppState {
        make_state(Seed::default(), TagListConfig::default())
    }

    fn closed_state(vocab: &[&str]) -> AppState {
        let entries = vocab.iter().map(|v| VocabularyEntry::new(*v)).collect();
        make_state(Seed::Vocabulary(entries), TagListConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) -> EventResult {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_enter_commits() {
        let mut state = free_state();
        type_str(&mut state, "rust");
        assert_eq!(state.list.entry(), "rust");
        assert_eq!(press(&mut state, KeyCode::Enter), EventResult::Continue);
        assert_eq!(state.list.values(), vec!["rust"]);
        assert_eq!(state.list.entry(), "");
    }

    #[test]
    fn test_backspace_edits_then_deletes() {
        let mut state = free_state();
        type_str(&mut state, "ab");
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "c");

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.list.entry(), "");
        assert_eq!(state.list.values(), vec!["ab"]);

        press(&mut state, KeyCode::Backspace);
        assert!(state.list.is_empty());
    }

    #[test]
    fn test_closed_vocabulary_commits_on_exact_match() {
        let mut state = closed_state(&["red", "green"]);
        type_str(&mut state, "red");
        assert_eq!(state.list.values(), vec!["red"]);
        assert_eq!(state.list.allowed_values(), ["green"]);
        assert_eq!(state.list.entry(), "");
    }

    #[test]
    fn test_tab_picks_suggestion() {
        let mut state = closed_state(&["red", "green", "grey"]);
        type_str(&mut state, "gr");
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.list.values(), vec!["grey"]);
    }

    #[test]
    fn test_tab_without_suggestions_ignored() {
        let mut state = free_state();
        assert_eq!(press(&mut state, KeyCode::Tab), EventResult::Ignored);
    }

    #[test]
    fn test_left_moves_focus_and_clears_nothing_typed() {
        let mut state = free_state();
        type_str(&mut state, "a");
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.focus, Focus::Item(0));

        press(&mut state, KeyCode::Delete);
        assert!(state.list.is_empty());
        assert_eq!(state.focus, Focus::Entry);
    }

    #[test]
    fn test_typing_on_item_returns_to_entry() {
        let mut state = free_state();
        type_str(&mut state, "a");
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Char('b'));
        assert_eq!(state.focus, Focus::Entry);
        assert_eq!(state.list.entry(), "b");
    }

    #[test]
    fn test_alt_arrows_reorder() {
        let mut state = make_state(
            Seed::Values(vec!["a".into(), "b".into()]),
            TagListConfig::default().with_reorder(true),
        );
        press(&mut state, KeyCode::Left);
        handle_key(&mut state, KeyEvent::new(KeyCode::Left, KeyModifiers::ALT));
        assert_eq!(state.list.values(), vec!["b", "a"]);
        assert_eq!(state.focus, Focus::Item(0));
    }

    #[test]
    fn test_ctrl_u_clears_entry() {
        let mut state = free_state();
        type_str(&mut state, "draft");
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(state.list.entry(), "");
    }

    #[test]
    fn test_exit_keys() {
        let mut state = free_state();
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Done);
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Abort
        );
    }

    #[test]
    fn test_router_key() {
        assert_eq!(router_key(KeyCode::Enter), Key::Enter);
        assert_eq!(router_key(KeyCode::Backspace), Key::Backspace);
        assert_eq!(router_key(KeyCode::Char('x')), Key::Char('x'));
        assert_eq!(router_key(KeyCode::F(1)), Key::Other);
    }
}
