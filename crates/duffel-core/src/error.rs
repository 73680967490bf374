//! Error types for archive packing and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ArchiveError`].
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packing or unpacking a container.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required argument was empty or missing.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// A source path handed to the packer does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Container is corrupted or cannot be read as an archive stream.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A directory could not be traversed while packing; the whole
    /// operation is abandoned.
    #[error("cannot traverse directory {path}: {source}")]
    Traversal {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl ArchiveError {
    /// Returns `true` if this error was raised by argument validation,
    /// before any stream was opened.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns a context string for this error, if available.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { reason } => Some(reason),
            Self::InvalidArchive(msg) => Some(msg),
            _ => None,
        }
    }
}
