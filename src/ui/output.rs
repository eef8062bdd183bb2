//! Presenters that turn render requests into status messages
//!
//! [`StdoutPresenter`] prints each change for the non-interactive CLI,
//! [`StatusPresenter`] buffers messages for the TUI status bar.

use super::error::Result;
use super::traits::Presenter;
use crate::taglist::{Item, ItemId};
use colored::Colorize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Token values by handle, so removals can be described by value
#[derive(Debug, Clone, Default)]
struct Tokens(HashMap<ItemId, String>);

impl Tokens {
    fn added(&mut self, item: &Item) {
        self.0.insert(item.id(), item.value().to_string());
    }

    fn removed(&mut self, id: ItemId) -> String {
        self.0.remove(&id).unwrap_or_else(|| id.to_string())
    }
}

/// CLI presenter - writes changes to stdout
///
/// # Examples
///
/// ```
/// use taglist::seed::Seed;
/// use taglist::taglist::{TagList, TagListConfig};
/// use taglist::ui::StdoutPresenter;
///
/// let mut tags = TagList::new(TagListConfig::default(), Seed::default(), StdoutPresenter::new(false));
/// tags.commit("rust");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StdoutPresenter {
    quiet: bool,
    tokens: Tokens,
}

impl StdoutPresenter {
    /// Create a new stdout presenter; `quiet` suppresses all output
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            tokens: Tokens::default(),
        }
    }
}

impl Presenter for StdoutPresenter {
    fn item_added(&mut self, item: &Item) -> Result<()> {
        self.tokens.added(item);
        if !self.quiet {
            println!("{} {}", "+".green(), item.value());
        }
        Ok(())
    }

    fn item_removed(&mut self, id: ItemId) -> Result<()> {
        let value = self.tokens.removed(id);
        if !self.quiet {
            println!("{} {}", "-".red(), value);
        }
        Ok(())
    }

    fn entry_cleared(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Buffered presenter for TUI status bars
///
/// Messages expire after a TTL.
///
/// # Examples
///
/// ```
/// use taglist::ui::{MessageLevel, StatusPresenter};
/// use std::time::Duration;
///
/// let mut status = StatusPresenter::with_ttl(Duration::from_secs(5));
/// status.push(MessageLevel::Warning, "value not allowed");
/// assert_eq!(status.latest_message().unwrap().1, "value not allowed");
/// ```
#[derive(Debug, Clone)]
pub struct StatusPresenter {
    messages: Vec<(MessageLevel, String, Instant)>,
    ttl: Duration,
    tokens: Tokens,
}

impl StatusPresenter {
    /// Create a status presenter with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a status presenter with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Vec::new(),
            ttl,
            tokens: Tokens::default(),
        }
    }

    /// Add a message
    pub fn push(&mut self, level: MessageLevel, message: impl Into<String>) {
        self.messages.push((level, message.into(), Instant::now()));

        // Keep only last 50 messages
        if self.messages.len() > 50 {
            let excess = self.messages.len() - 50;
            self.messages.drain(0..excess);
        }
    }

    /// Get the most recent message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        self.messages
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }
}

impl Default for StatusPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for StatusPresenter {
    fn item_added(&mut self, item: &Item) -> Result<()> {
        self.tokens.added(item);
        self.push(MessageLevel::Success, format!("Added '{}'", item.value()));
        Ok(())
    }

    fn item_removed(&mut self, id: ItemId) -> Result<()> {
        let value = self.tokens.removed(id);
        self.push(MessageLevel::Info, format!("Removed '{value}'"));
        Ok(())
    }

    fn entry_cleared(&mut self) -> Result<()> {
        Ok(())
    }
}
