//! Container extraction.

use std::fs::File;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::time::Instant;

use crate::Result;
use crate::container;
use crate::copy;
use crate::error::ArchiveError;
use crate::fsutil;
use crate::unpack::report::UnpackReport;

/// Extracts every entry of a container under `dest_dir`.
///
/// Equivalent to [`unpack_filtered`] with no keyword.
///
/// # Errors
///
/// Same conditions as [`unpack_filtered`].
pub fn unpack_all<P: AsRef<Path>, Q: AsRef<Path>>(
    container: P,
    dest_dir: Q,
) -> Result<UnpackReport> {
    unpack_filtered(container, dest_dir, None)
}

/// Extracts a container's entries under `dest_dir`, restricted to
/// entries whose stored name contains `keyword` (all entries when the
/// keyword is absent or empty).
///
/// Entries are processed in stored order. Each participating entry's
/// destination path is recorded in the report before materialization is
/// attempted. A directory (or destination-file) creation failure stops
/// iteration and yields a partial report with `completed == false`; a
/// per-file payload copy failure is logged and iteration continues.
/// Entry names that would resolve outside `dest_dir` are skipped with a
/// warning.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidArgument`] without touching the
/// filesystem when either path is empty, and
/// [`ArchiveError::InvalidArchive`] when the container stream cannot be
/// read.
///
/// # Examples
///
/// ```no_run
/// use duffel_core::unpack_filtered;
///
/// let report = unpack_filtered("backup.duf", "/tmp/restore", Some("logs"))?;
/// for path in &report.paths {
///     println!("{}", path.display());
/// }
/// # Ok::<(), duffel_core::ArchiveError>(())
/// ```
pub fn unpack_filtered<P: AsRef<Path>, Q: AsRef<Path>>(
    container: P,
    dest_dir: Q,
    keyword: Option<&str>,
) -> Result<UnpackReport> {
    let container_path = container.as_ref();
    let dest_dir = dest_dir.as_ref();

    if container_path.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "container path is empty".to_string(),
        });
    }
    if dest_dir.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "destination directory is empty".to_string(),
        });
    }
    let keyword = keyword.filter(|k| !k.is_empty());

    let mut archive = container::open_reader(container_path)?;
    let mut report = UnpackReport::new();
    let start = Instant::now();

    let entries = archive
        .entries()
        .map_err(|e| container::invalid_archive("failed to read entries", &e))?;

    for entry in entries {
        let mut entry =
            entry.map_err(|e| container::invalid_archive("failed to read entry", &e))?;
        let name = container::stored_entry_name(&entry);

        if let Some(keyword) = keyword
            && !name.contains(keyword)
        {
            continue;
        }

        let destination = dest_dir.join(&name);
        report.paths.push(destination.clone());

        if escapes_destination(&name) {
            tracing::warn!(entry = %name, "entry name escapes the destination, skipping");
            report
                .add_warning(format!("skipped entry with unsafe name: {name}"));
            report.files_skipped += 1;
            continue;
        }

        let is_marker =
            entry.header().entry_type().is_dir() || container::is_marker_name(&name);

        if is_marker {
            if let Err(err) = fsutil::ensure_dir(&destination) {
                tracing::warn!(
                    path = %destination.display(),
                    error = %err,
                    "directory creation failed, stopping extraction"
                );
                report.add_warning(format!(
                    "failed to create directory {}: {err}",
                    destination.display()
                ));
                report.completed = false;
                break;
            }
            report.dirs_created += 1;
        } else {
            if let Err(err) = fsutil::ensure_file(&destination) {
                tracing::warn!(
                    path = %destination.display(),
                    error = %err,
                    "destination file creation failed, stopping extraction"
                );
                report.add_warning(format!(
                    "failed to create file {}: {err}",
                    destination.display()
                ));
                report.completed = false;
                break;
            }
            match write_payload(&mut entry, &destination) {
                Ok(()) => report.files_extracted += 1,
                Err(err) => {
                    tracing::warn!(
                        path = %destination.display(),
                        error = %err,
                        "payload copy failed, continuing"
                    );
                    report.add_warning(format!(
                        "failed to extract {}: {err}",
                        destination.display()
                    ));
                    report.files_skipped += 1;
                }
            }
        }
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// Streams one entry's payload into its destination file.
fn write_payload<R: Read>(
    entry: &mut tar::Entry<'_, R>,
    destination: &Path,
) -> std::io::Result<()> {
    let mut out = File::create(destination)?;
    copy::copy_streaming(entry, &mut out)?;
    Ok(())
}

/// Returns `true` when a stored entry name would resolve outside the
/// destination directory.
fn escapes_destination(name: &str) -> bool {
    let path = Path::new(name);
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
}
