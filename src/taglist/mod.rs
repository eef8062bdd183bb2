//! Tag collection controller
//!
//! [`TagList`] owns the committed items, the allowed-value pool and the
//! entry buffer of a multi-value input. All mutations go through it and
//! every successful mutation is reported to a [`Presenter`] so a front-end
//! can redraw.
//!
//! # Example
//!
//! ```
//! use taglist::seed::Seed;
//! use taglist::taglist::{TagList, TagListConfig};
//!
//! let mut tags = TagList::with_seed(TagListConfig::default(), Seed::default());
//! tags.add_values(["a", "b", "c"]);
//! assert_eq!(tags.values(), vec!["a", "b", "c"]);
//! ```

mod events;
mod pool;
mod types;

pub use events::{EntryState, Key, Signal, Transition};
pub use pool::AllowedPool;
pub use types::{CommitResult, Item, ItemId, Mode, RejectReason, TagListConfig, ValueList};

use crate::seed::Seed;
use crate::ui::{NullPresenter, Presenter};
use tracing::{debug, warn};

/// Interactive multi-value input state
#[derive(Debug)]
pub struct TagList<P: Presenter = NullPresenter> {
    config: TagListConfig,
    mode: Mode,
    items: Vec<Item>,
    pool: AllowedPool,
    entry: String,
    next_id: u64,
    presenter: P,
}

impl TagList<NullPresenter> {
    /// Create a tag list without a presentation layer
    #[must_use]
    pub fn with_seed(config: TagListConfig, seed: Seed) -> Self {
        Self::new(config, seed, NullPresenter)
    }
}

impl<P: Presenter> TagList<P> {
    /// Create a tag list from configuration and seed data
    ///
    /// Initial values go through [`commit`](Self::commit), so they obey the
    /// same duplicate, maximum and vocabulary rules as typed values.
    pub fn new(config: TagListConfig, seed: Seed, presenter: P) -> Self {
        let mode = seed.mode();
        let mut list = Self {
            config,
            mode,
            items: Vec::new(),
            pool: AllowedPool::new(seed.vocabulary()),
            entry: String::new(),
            next_id: 0,
            presenter,
        };

        for value in seed.initial_values() {
            if let CommitResult::Rejected(reason) = list.commit(&value) {
                debug!(value = %value, %reason, "initial value rejected");
            }
        }
        list
    }

    /// Check whether `candidate` could be committed right now
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: duplicates, then maximum items, then
    /// vocabulary membership.
    pub fn check(&self, candidate: &str) -> Result<(), RejectReason> {
        if !self.config.allow_duplicates && self.items.iter().any(|i| i.value == candidate) {
            return Err(RejectReason::DuplicateNotAllowed);
        }
        if self.is_full() {
            return Err(RejectReason::MaxItemsReached);
        }
        if self.mode == Mode::ClosedVocabulary && !self.pool.contains(candidate) {
            return Err(RejectReason::NotAllowed);
        }
        Ok(())
    }

    /// Append `candidate` as a new item if every rule allows it
    ///
    /// A rejection leaves all state untouched, including the entry buffer.
    pub fn commit(&mut self, candidate: &str) -> CommitResult {
        if let Err(reason) = self.check(candidate) {
            debug!(value = candidate, %reason, "commit rejected");
            return CommitResult::Rejected(reason);
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        let item = Item {
            id,
            value: candidate.to_string(),
        };

        self.entry.clear();
        if self.tracks_pool() {
            self.pool.remove(candidate);
        }
        debug!(value = candidate, %id, "item committed");

        if let Err(e) = self.presenter.item_added(&item) {
            warn!(error = %e, "presenter failed to render added item");
        }
        self.items.push(item);
        if let Err(e) = self.presenter.entry_cleared() {
            warn!(error = %e, "presenter failed to clear entry");
        }
        CommitResult::Committed(id)
    }

    /// Remove the item with handle `id`
    ///
    /// Returns the removed item, or `None` if no such item exists.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        self.delete_at(index)
    }

    /// Remove the item at position `index`
    pub fn delete_at(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        if self.tracks_pool() {
            self.pool.restore(item.value.clone());
        }
        debug!(value = %item.value, id = %item.id, "item deleted");

        if let Err(e) = self.presenter.item_removed(item.id) {
            warn!(error = %e, "presenter failed to remove item");
        }
        Some(item)
    }

    /// Accept a reorder reported by the reorder provider
    ///
    /// Moves the item at `from` so that it ends up at `to`. Returns `false`
    /// and changes nothing if reordering is disabled or either index is out
    /// of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if !self.config.reorder_enabled {
            debug!(from, to, "reorder ignored: reordering disabled");
            return false;
        }
        if from >= self.items.len() || to >= self.items.len() {
            debug!(from, to, len = self.items.len(), "reorder ignored: out of range");
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        debug!(from, to, "items reordered");
        true
    }

    /// Commit each value in order; returns one result per value
    ///
    /// Some values may be rejected while others succeed.
    pub fn add_values(&mut self, values: impl Into<ValueList>) -> Vec<CommitResult> {
        values
            .into()
            .into_inner()
            .iter()
            .map(|value| self.commit(value))
            .collect()
    }

    /// Current values in display order
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.items.iter().map(|i| i.value.clone()).collect()
    }

    /// Committed items in display order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item directly before the entry field
    #[must_use]
    pub fn last_item(&self) -> Option<&Item> {
        self.items.last()
    }

    /// Uncommitted entry text
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Values still selectable (closed vocabulary), in suggestion order
    #[must_use]
    pub fn allowed_values(&self) -> &[String] {
        self.pool.as_slice()
    }

    /// Allowed values matching the entry buffer, at most `limit`
    ///
    /// Matches are case-insensitive subsequences of the value, so `rd`
    /// suggests `red`. Empty in free-form mode.
    #[must_use]
    pub fn suggestions(&self, limit: usize) -> Vec<&str> {
        if self.mode != Mode::ClosedVocabulary || self.pool.is_empty() {
            return Vec::new();
        }
        let query = self.entry.to_lowercase();
        self.pool
            .iter()
            .filter(|value| subsequence_match(&value.to_lowercase(), &query))
            .take(limit)
            .collect()
    }

    /// Operating mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Construction-time configuration
    #[must_use]
    pub const fn config(&self) -> &TagListConfig {
        &self.config
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are committed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `max_items` has been reached
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.config.max_items > 0 && self.items.len() >= self.config.max_items
    }

    /// The presentation layer
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presentation layer
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Pool bookkeeping applies only to a closed vocabulary without duplicates
    const fn tracks_pool(&self) -> bool {
        matches!(self.mode, Mode::ClosedVocabulary) && !self.config.allow_duplicates
    }
}

/// Checks if `pattern` chars appear in `text` in order
fn subsequence_match(text: &str, pattern: &str) -> bool {
    let mut pattern_chars = pattern.chars().peekable();
    for c in text.chars() {
        if pattern_chars.peek() == Some(&c) {
            pattern_chars.next();
        }
    }
    pattern_chars.peek().is_none()
}
