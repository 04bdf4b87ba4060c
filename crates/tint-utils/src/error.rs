//! Error types for the Tint utilities.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for utility operations.
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors that can occur while loading resources or package metadata.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Image resource could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No package registered under the requested name.
    #[error("package not found: {0}")]
    PackageNotFound(String),

    /// Version string is not `MAJOR.MINOR.PATCH`.
    #[error("invalid version {0:?}")]
    InvalidVersion(String),
}
