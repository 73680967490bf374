//! Public packing operations and the fluent [`Packer`] builder.

use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::Result;
use crate::container;
use crate::error::ArchiveError;
use crate::fsutil;
use crate::pack::config::PackConfig;
use crate::pack::report::PackReport;
use crate::pack::tree::PackFlow;
use crate::pack::tree::TreePacker;

/// Packs several sources into one container.
///
/// Each source sits at the container root: its own base name becomes
/// the top-level prefix of its entries. The destination file is created
/// or overwritten. If any source cannot be fully packed the operation
/// stops with an error and the partially written container is left in
/// place.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidArgument`] before touching the
/// filesystem when `sources` is empty or `destination` is an empty
/// path, [`ArchiveError::SourceNotFound`] for a missing source, and
/// [`ArchiveError::Traversal`] when a directory cannot be listed.
///
/// # Examples
///
/// ```no_run
/// use duffel_core::PackConfig;
/// use duffel_core::pack_many;
///
/// let config = PackConfig::default().with_comment("weekly");
/// let report = pack_many(&["notes/", "todo.txt"], "weekly.duf", &config)?;
/// println!("packed {} entries", report.total_entries());
/// # Ok::<(), duffel_core::ArchiveError>(())
/// ```
pub fn pack_many<P: AsRef<Path>, Q: AsRef<Path>>(
    sources: &[P],
    destination: Q,
    config: &PackConfig,
) -> Result<PackReport> {
    let destination = destination.as_ref();

    if sources.is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "no source paths provided".to_string(),
        });
    }
    if destination.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "destination path is empty".to_string(),
        });
    }
    config.validate()?;

    let mut builder = container::create_writer(destination, config.compression_level)?;
    let mut report = PackReport::new();
    let start = Instant::now();

    for source in sources {
        let path = source.as_ref();

        if !fsutil::file_exists(path) {
            return Err(ArchiveError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut packer = TreePacker::new(&mut builder, config.comment.as_deref(), &mut report);
        if let PackFlow::Abort(err) = packer.pack_node(path, "") {
            return Err(err);
        }
    }

    container::finish_writer(builder)?;
    report.duration = start.elapsed();

    Ok(report)
}

/// Packs a single source into a container.
///
/// Convenience form of [`pack_many`] for one source.
///
/// # Errors
///
/// Same conditions as [`pack_many`].
pub fn pack_one<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    config: &PackConfig,
) -> Result<PackReport> {
    pack_many(&[source.as_ref()], destination, config)
}

/// Fluent builder for packing operations.
///
/// # Examples
///
/// ```no_run
/// use duffel_core::Packer;
///
/// let report = Packer::new()
///     .output("backup.duf")
///     .add_source("src/")
///     .add_source("Cargo.toml")
///     .comment("pre-release")
///     .compression_level(9)
///     .pack()?;
///
/// println!("packed {} files", report.files_added);
/// # Ok::<(), duffel_core::ArchiveError>(())
/// ```
#[derive(Debug, Default)]
pub struct Packer {
    output: Option<PathBuf>,
    sources: Vec<PathBuf>,
    config: PackConfig,
}

impl Packer {
    /// Creates a new `Packer` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination container path.
    #[must_use]
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a source file or directory.
    #[must_use]
    pub fn add_source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds multiple source files or directories.
    #[must_use]
    pub fn sources<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        self.sources
            .extend(paths.iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Sets the comment attached to every entry.
    #[must_use]
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.config = self.config.with_comment(comment);
        self
    }

    /// Sets the compression level (1-9).
    #[must_use]
    pub fn compression_level(mut self, level: u8) -> Self {
        self.config.compression_level = Some(level);
        self
    }

    /// Sets the full configuration at once.
    #[must_use]
    pub fn config(mut self, config: PackConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the packing operation.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidArgument`] when the output path is
    /// not set or no sources were added, plus every [`pack_many`]
    /// condition.
    pub fn pack(self) -> Result<PackReport> {
        let output = self.output.ok_or_else(|| ArchiveError::InvalidArgument {
            reason: "output path not set".to_string(),
        })?;
        pack_many(&self.sources, &output, &self.config)
    }
}
