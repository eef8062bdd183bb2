//! Recording presenter for testing

use super::error::{Result, UiError};
use super::traits::Presenter;
use crate::taglist::{Item, ItemId};

/// A render request as seen by the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    /// `item_added` with the item's value
    ItemAdded(String),
    /// `item_removed`
    ItemRemoved(ItemId),
    /// `entry_cleared`
    EntryCleared,
}

/// Presenter that records every request it receives
///
/// Useful for testing without a rendering surface
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    /// Requests in arrival order
    pub requests: Vec<RenderRequest>,
    /// Whether to report a failure after recording
    pub should_fail: bool,
}

impl RecordingPresenter {
    /// Create a presenter that records and then fails every request
    #[must_use]
    pub fn failing() -> Self {
        Self {
            requests: Vec::new(),
            should_fail: true,
        }
    }

    fn record(&mut self, request: RenderRequest) -> Result<()> {
        self.requests.push(request);
        if self.should_fail {
            Err(UiError::RenderError("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Presenter for RecordingPresenter {
    fn item_added(&mut self, item: &Item) -> Result<()> {
        self.record(RenderRequest::ItemAdded(item.value().to_string()))
    }

    fn item_removed(&mut self, id: ItemId) -> Result<()> {
        self.record(RenderRequest::ItemRemoved(id))
    }

    fn entry_cleared(&mut self) -> Result<()> {
        self.record(RenderRequest::EntryCleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_presenter_still_records() {
        let mut presenter = RecordingPresenter::failing();
        assert!(presenter.entry_cleared().is_err());
        assert_eq!(presenter.requests, vec![RenderRequest::EntryCleared]);
    }
}
