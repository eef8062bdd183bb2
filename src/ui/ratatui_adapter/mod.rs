//! Ratatui-based tag list front-end
//!
//! A terminal presentation layer for [`crate::taglist::TagList`]. It
//! forwards key presses as signals, plays the reorder provider for
//! Alt+arrow moves, and redraws from the tag list state every frame.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              TagListApp                     │
//! │   (terminal setup, event loop, layout)      │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │  (TagList) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::TagListApp;
pub use events::{EventResult, handle_key, router_key};
pub use state::{AppState, Focus};
pub use theme::Theme;
