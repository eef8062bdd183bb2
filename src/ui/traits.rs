//! Core traits for the presentation boundary

use super::error::Result;
use crate::taglist::{Item, ItemId};

/// Receives render requests from a [`crate::taglist::TagList`]
///
/// Requests are fire-and-forget: the tag list has already changed its
/// state when a request is made, and an error returned here is logged and
/// otherwise ignored.
pub trait Presenter {
    /// A new item token should appear before the entry field
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be rendered.
    fn item_added(&mut self, item: &Item) -> Result<()>;

    /// The token for `id` should disappear
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be removed.
    fn item_removed(&mut self, id: ItemId) -> Result<()>;

    /// The entry field should be emptied
    ///
    /// # Errors
    ///
    /// Returns an error if the entry field cannot be cleared.
    fn entry_cleared(&mut self) -> Result<()>;
}

/// Presenter that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn item_added(&mut self, _item: &Item) -> Result<()> {
        Ok(())
    }

    fn item_removed(&mut self, _id: ItemId) -> Result<()> {
        Ok(())
    }

    fn entry_cleared(&mut self) -> Result<()> {
        Ok(())
    }
}
