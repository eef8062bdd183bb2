//! Presentation boundary
//!
//! A [`crate::taglist::TagList`] never draws anything itself. After each
//! successful mutation it sends a render request to its [`Presenter`],
//! and front-ends read the tag list state to redraw.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      TagList (state machine)            │
//! └────────────────┬────────────────────────┘
//!                  │ render requests
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Presenter trait                    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI           │  │ TUI               │
//! │ - Stdout      │  │ - StatusPresenter │
//! │ - Null        │  │   + TagListApp    │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Presenter
//!
//! ```
//! use taglist::taglist::{Item, ItemId};
//! use taglist::ui::{Presenter, Result};
//!
//! struct Tokens(Vec<String>);
//!
//! impl Presenter for Tokens {
//!     fn item_added(&mut self, item: &Item) -> Result<()> {
//!         self.0.push(item.value().to_string());
//!         Ok(())
//!     }
//!
//!     fn item_removed(&mut self, _id: ItemId) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn entry_cleared(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//! ```

mod error;
mod traits;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, StatusPresenter, StdoutPresenter};
pub use traits::{NullPresenter, Presenter};
