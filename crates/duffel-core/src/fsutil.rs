//! Filesystem helpers shared by packing and extraction.

use std::fs;
use std::fs::OpenOptions;
use std::path::Path;

/// Returns `true` if `path` exists on the filesystem.
#[must_use]
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Ensures `path` exists as a directory, creating intermediate
/// directories as needed. Idempotent.
///
/// # Errors
///
/// Returns an error if a directory component cannot be created, or if
/// `path` exists but is not a directory.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

/// Ensures `path` exists as a regular file, creating parent directories
/// and an empty file when absent. Idempotent; an existing file is left
/// untouched.
///
/// # Errors
///
/// Returns an error if a parent directory or the file itself cannot be
/// created.
pub fn ensure_file<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}
