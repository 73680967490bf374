//! Container format plumbing.
//!
//! A container is a gzip-compressed TAR stream. Per-entry comments ride
//! in PAX extended headers under the standard `comment` keyword, and
//! empty directories are preserved as zero-payload directory entries
//! whose stored name ends in the path separator.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::MAIN_SEPARATOR;
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::Result;
use crate::error::ArchiveError;

/// PAX record key carrying an entry's comment.
pub const COMMENT_KEY: &str = "comment";

/// Opens a container for reading.
///
/// # Errors
///
/// Returns an error if the container file cannot be opened.
pub fn open_reader(path: &Path) -> Result<tar::Archive<GzDecoder<BufReader<File>>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let decoder = GzDecoder::new(reader);
    Ok(tar::Archive::new(decoder))
}

/// Creates (or overwrites) a container for writing.
///
/// # Errors
///
/// Returns an error if the destination file cannot be created.
pub fn create_writer(path: &Path, level: Option<u8>) -> Result<tar::Builder<GzEncoder<File>>> {
    let file = File::create(path)?;
    let encoder = GzEncoder::new(file, compression_level_to_flate2(level));
    Ok(tar::Builder::new(encoder))
}

/// Finishes a container writer, flushing the TAR trailer and the gzip
/// stream so write errors surface instead of being lost in `Drop`.
///
/// # Errors
///
/// Returns an error if the trailer or compressed tail cannot be written.
pub fn finish_writer(mut builder: tar::Builder<GzEncoder<File>>) -> Result<()> {
    builder.finish()?;
    let mut encoder = builder.into_inner()?;
    encoder.try_finish()?;
    Ok(())
}

/// Joins an entry-name prefix and a base name with the host's native
/// separator. An empty prefix yields the base name alone.
#[must_use]
pub fn join_entry_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{MAIN_SEPARATOR}{name}")
    }
}

/// Returns `true` if a stored entry name denotes a directory marker.
#[must_use]
pub fn is_marker_name(name: &str) -> bool {
    name.ends_with(MAIN_SEPARATOR)
}

/// Returns the stored name of an entry. Directory markers carry a
/// trailing separator, restored here when the TAR header dropped it
/// during path normalization.
#[must_use]
pub fn stored_entry_name<R: Read>(entry: &tar::Entry<'_, R>) -> String {
    let mut name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
    if entry.header().entry_type().is_dir() && !name.ends_with(MAIN_SEPARATOR) {
        name.push(MAIN_SEPARATOR);
    }
    name
}

/// Returns the entry's comment, if one was stored with it.
///
/// # Errors
///
/// Returns an error if the entry's extended headers cannot be read.
pub fn entry_comment<R: Read>(entry: &mut tar::Entry<'_, R>) -> std::io::Result<Option<String>> {
    let Some(extensions) = entry.pax_extensions()? else {
        return Ok(None);
    };
    for extension in extensions {
        let extension = extension?;
        if extension.key().ok() == Some(COMMENT_KEY) {
            return Ok(extension.value().ok().map(ToOwned::to_owned));
        }
    }
    Ok(None)
}

/// Maps the user-facing compression level (1-9) onto a flate2 level.
#[must_use]
pub fn compression_level_to_flate2(level: Option<u8>) -> flate2::Compression {
    match level {
        None | Some(6) => flate2::Compression::default(),
        Some(1..=3) => flate2::Compression::fast(),
        Some(7..=9) => flate2::Compression::best(),
        Some(n) => flate2::Compression::new(u32::from(n)),
    }
}

/// Converts an archive-stream error into [`ArchiveError::InvalidArchive`]
/// with a short description of the failed operation.
pub(crate) fn invalid_archive(what: &str, err: &std::io::Error) -> ArchiveError {
    ArchiveError::InvalidArchive(format!("{what}: {err}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_join_entry_name_empty_prefix() {
        assert_eq!(join_entry_name("", "data.txt"), "data.txt");
    }

    #[test]
    fn test_join_entry_name_nested() {
        let joined = join_entry_name("root", "data.txt");
        assert_eq!(joined, format!("root{MAIN_SEPARATOR}data.txt"));

        let deeper = join_entry_name(&joined, "more");
        assert_eq!(
            deeper,
            format!("root{MAIN_SEPARATOR}data.txt{MAIN_SEPARATOR}more")
        );
    }

    #[test]
    fn test_is_marker_name() {
        assert!(is_marker_name(&format!("empty{MAIN_SEPARATOR}")));
        assert!(!is_marker_name("data.txt"));
        assert!(!is_marker_name(""));
    }

    #[test]
    fn test_compression_level_mapping() {
        assert_eq!(
            compression_level_to_flate2(None),
            flate2::Compression::default()
        );
        assert_eq!(
            compression_level_to_flate2(Some(1)),
            flate2::Compression::fast()
        );
        assert_eq!(
            compression_level_to_flate2(Some(9)),
            flate2::Compression::best()
        );
        assert_eq!(
            compression_level_to_flate2(Some(6)),
            flate2::Compression::default()
        );
    }
}
