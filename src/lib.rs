//! Taglist - an interactive multi-value tag input
//!
//! This library provides the state machine behind a "tag list" form
//! control: a row of committed value tokens followed by an entry field.
//! Values can come from a closed vocabulary or be typed freely, and the
//! list enforces duplicate, maximum-count and vocabulary rules.
//!
//! - [`taglist`]: the controller, its event router and the allowed-value pool
//! - [`seed`]: initial data (vocabulary or serialized values)
//! - [`ui`]: the presenter boundary and a ratatui front-end
//! - [`config`], [`cli`], [`logging`]: the `taglist` binary's ambient stack

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod logging;
pub mod seed;
pub mod taglist;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TaglistError {
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
