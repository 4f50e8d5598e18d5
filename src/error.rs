//! Error types for postlayout library.

use std::io;
use thiserror::Error;

/// Result type alias for postlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading posts or rendering directives.
///
/// Resolving a layout never fails; these errors only come from the
/// surrounding I/O and serialization surfaces.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is neither a post object nor a block array.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A block envelope could not be read (strict mode only).
    #[error("Invalid block at index {index}: {reason}")]
    InvalidBlock {
        /// Zero-based position of the block in the post
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
