//! Error conversion utilities for CLI.
//!
//! Converts duffel-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use duffel_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to a user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::InvalidArgument { reason } => {
            anyhow!("Invalid invocation: {reason}")
        }
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Source not found: {}\n\
                 HINT: Check the path for typos; sources are resolved relative to the current directory.",
                path.display()
            )
        }
        ArchiveError::Traversal { path, source } => {
            anyhow!(
                "Cannot read directory '{}': {source}\n\
                 HINT: Packing stops at the first unreadable directory; '{}' may be incomplete.",
                path.display(),
                archive.display()
            )
        }
        ArchiveError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid container '{}': {reason}\n\
                 HINT: The file may be corrupted or not a duffel container.",
                archive.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}",
                archive.display()
            )
        }
    }
}

/// Adds context to a core result about container operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}
