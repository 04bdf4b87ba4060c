//! Error types for the platform adapters.

use thiserror::Error;

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Errors raised by host facilities.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// System clipboard could not be opened or written.
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// No installed handler accepts the request.
    #[error("no handler for {0}")]
    NoHandler(String),
}
