//! Errors raised while carrying out render requests

use thiserror::Error;

/// Failure reported by a [`super::Presenter`]
#[derive(Debug, Error)]
pub enum UiError {
    /// A render request could not be carried out
    #[error("Render failed: {0}")]
    RenderError(String),

    /// Writing to the terminal or output stream failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of a render request
pub type Result<T> = std::result::Result<T, UiError>;
