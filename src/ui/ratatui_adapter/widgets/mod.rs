//! Ratatui widgets for the tag list TUI

mod help_bar;
mod status_bar;
mod tag_input;

pub use help_bar::{HelpBar, KeyHint};
pub use status_bar::StatusBar;
pub use tag_input::TagInput;
