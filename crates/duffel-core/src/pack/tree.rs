//! Recursive depth-first packing of source trees.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::MAIN_SEPARATOR;
use std::path::Path;
use std::path::PathBuf;

use tar::Builder;
use tar::EntryType;
use tar::Header;

use crate::container;
use crate::error::ArchiveError;
use crate::pack::report::PackReport;

/// Outcome of packing one node of the source tree.
///
/// The two variants carry the asymmetric failure policy: a failure to
/// read an individual file (or to write a directory marker) is logged
/// and the walk continues with the node's siblings, while a failure to
/// list a directory unwinds the entire operation through every
/// enclosing recursive call.
#[derive(Debug)]
pub(crate) enum PackFlow {
    /// Node handled (or its failure logged); keep going with siblings.
    Continue,
    /// Structural failure; abandon the whole pack.
    Abort(ArchiveError),
}

/// Walks a source tree and appends its entries to a container stream.
///
/// One `TreePacker` holds the single output stream shared by every
/// recursive frame of one packing call.
pub(crate) struct TreePacker<'a, W: Write> {
    builder: &'a mut Builder<W>,
    comment: Option<&'a str>,
    report: &'a mut PackReport,
}

impl<'a, W: Write> TreePacker<'a, W> {
    pub(crate) fn new(
        builder: &'a mut Builder<W>,
        comment: Option<&'a str>,
        report: &'a mut PackReport,
    ) -> Self {
        Self {
            builder,
            comment,
            report,
        }
    }

    /// Packs `node` under `root_prefix`, depth-first and pre-order.
    ///
    /// The entry name is `root_prefix` joined with the node's base name
    /// using the host separator; an empty prefix means the node sits at
    /// the container root.
    pub(crate) fn pack_node(&mut self, node: &Path, root_prefix: &str) -> PackFlow {
        let Some(base_name) = node.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return PackFlow::Abort(ArchiveError::InvalidArgument {
                reason: format!("source {} has no base name", node.display()),
            });
        };
        let entry_name = container::join_entry_name(root_prefix, &base_name);

        if node.is_dir() {
            let children = match list_children(node) {
                Ok(children) => children,
                Err(err) => {
                    tracing::warn!(
                        path = %node.display(),
                        error = %err,
                        "directory listing failed, abandoning pack"
                    );
                    return PackFlow::Abort(ArchiveError::Traversal {
                        path: node.to_path_buf(),
                        source: err,
                    });
                }
            };

            if children.is_empty() {
                // An empty directory is only representable as an
                // explicit marker entry with a trailing separator.
                let marker_name = format!("{entry_name}{MAIN_SEPARATOR}");
                match self.write_marker(node, &marker_name) {
                    Ok(()) => self.report.markers_added += 1,
                    Err(err) => {
                        tracing::warn!(
                            entry = %marker_name,
                            error = %err,
                            "failed to write directory marker"
                        );
                        self.report
                            .add_warning(format!("failed to write marker {marker_name}: {err}"));
                    }
                }
            } else {
                for child in &children {
                    if let PackFlow::Abort(err) = self.pack_node(child, &entry_name) {
                        return PackFlow::Abort(err);
                    }
                }
            }
        } else {
            match self.write_file(node, &entry_name) {
                Ok(bytes) => {
                    self.report.files_added += 1;
                    self.report.bytes_written += bytes;
                }
                Err(err) => {
                    tracing::warn!(
                        path = %node.display(),
                        error = %err,
                        "failed to pack file, continuing"
                    );
                    self.report.files_skipped += 1;
                    self.report
                        .add_warning(format!("skipped file {}: {err}", node.display()));
                }
            }
        }

        PackFlow::Continue
    }

    /// Writes a zero-payload directory marker entry.
    fn write_marker(&mut self, dir: &Path, marker_name: &str) -> std::io::Result<()> {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::dir());
        header.set_size(0);
        header.set_mode(0o755);
        header.set_mtime(fs::metadata(dir).as_ref().map_or(0, modified_secs));
        header.set_cksum();

        self.append_comment()?;
        self.builder
            .append_data(&mut header, Path::new(marker_name), std::io::empty())
    }

    /// Streams one file's bytes into a new container entry.
    fn write_file(&mut self, file_path: &Path, entry_name: &str) -> std::io::Result<u64> {
        let mut file = File::open(file_path)?;
        let metadata = file.metadata()?;

        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::file());
        header.set_size(metadata.len());
        header.set_mode(0o644);
        header.set_mtime(modified_secs(&metadata));
        header.set_cksum();

        self.append_comment()?;
        self.builder
            .append_data(&mut header, Path::new(entry_name), &mut file)?;
        Ok(metadata.len())
    }

    /// Attaches the call comment to the next appended entry.
    fn append_comment(&mut self) -> std::io::Result<()> {
        if let Some(comment) = self.comment {
            self.builder
                .append_pax_extensions([(container::COMMENT_KEY, comment.as_bytes())])?;
        }
        Ok(())
    }
}

/// Lists a directory's children in name order, so repeated packs of an
/// unchanged tree produce identical entry sequences.
fn list_children(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        children.push(entry?.path());
    }
    children.sort();
    Ok(children)
}

fn modified_secs(metadata: &fs::Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_secs())
}
