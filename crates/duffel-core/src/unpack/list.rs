//! Container inspection without extraction.

use std::path::Path;

use crate::Result;
use crate::container;
use crate::error::ArchiveError;

/// Returns every stored entry's name, in stored order.
///
/// Directory markers keep their trailing separator. No filesystem
/// writes happen.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidArgument`] for an empty container
/// path, or an error when the container cannot be opened or read.
pub fn entry_names<P: AsRef<Path>>(container: P) -> Result<Vec<String>> {
    let container_path = container.as_ref();
    if container_path.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "container path is empty".to_string(),
        });
    }

    let mut archive = container::open_reader(container_path)?;
    let entries = archive
        .entries()
        .map_err(|e| container::invalid_archive("failed to read entries", &e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| container::invalid_archive("failed to read entry", &e))?;
        names.push(container::stored_entry_name(&entry));
    }
    Ok(names)
}

/// Returns every stored entry's comment, in stored order, positionally
/// aligned with [`entry_names`].
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidArgument`] for an empty container
/// path, or an error when the container cannot be opened or read.
pub fn entry_comments<P: AsRef<Path>>(container: P) -> Result<Vec<Option<String>>> {
    let container_path = container.as_ref();
    if container_path.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidArgument {
            reason: "container path is empty".to_string(),
        });
    }

    let mut archive = container::open_reader(container_path)?;
    let entries = archive
        .entries()
        .map_err(|e| container::invalid_archive("failed to read entries", &e))?;

    let mut comments = Vec::new();
    for entry in entries {
        let mut entry =
            entry.map_err(|e| container::invalid_archive("failed to read entry", &e))?;
        let comment = container::entry_comment(&mut entry)
            .map_err(|e| container::invalid_archive("failed to read entry comment", &e))?;
        comments.push(comment);
    }
    Ok(comments)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::PackConfig;
    use crate::pack::pack_one;
    use std::fs;
    use std::path::MAIN_SEPARATOR;
    use tempfile::TempDir;

    fn packed_sample(temp: &TempDir, config: &PackConfig) -> std::path::PathBuf {
        let root = temp.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir(root.join("hollow")).unwrap();
        fs::write(root.join("z.txt"), "z").unwrap();

        let archive = temp.path().join("sample.duf");
        pack_one(&root, &archive, config).unwrap();
        archive
    }

    #[test]
    fn test_entry_names_in_stored_order() {
        let temp = TempDir::new().unwrap();
        let archive = packed_sample(&temp, &PackConfig::default());

        let sep = MAIN_SEPARATOR;
        let names = entry_names(&archive).unwrap();
        assert_eq!(
            names,
            vec![
                format!("root{sep}a.txt"),
                format!("root{sep}hollow{sep}"),
                format!("root{sep}z.txt"),
            ]
        );
    }

    #[test]
    fn test_marker_names_keep_trailing_separator() {
        let temp = TempDir::new().unwrap();
        let archive = packed_sample(&temp, &PackConfig::default());

        let names = entry_names(&archive).unwrap();
        let markers: Vec<_> = names
            .iter()
            .filter(|n| container::is_marker_name(n))
            .collect();
        assert_eq!(markers.len(), 1);
        assert!(markers[0].contains("hollow"));
    }

    #[test]
    fn test_comments_aligned_with_names() {
        let temp = TempDir::new().unwrap();
        let config = PackConfig::default().with_comment("aligned");
        let archive = packed_sample(&temp, &config);

        let names = entry_names(&archive).unwrap();
        let comments = entry_comments(&archive).unwrap();

        assert_eq!(names.len(), comments.len());
        for comment in &comments {
            assert_eq!(comment.as_deref(), Some("aligned"));
        }
    }

    #[test]
    fn test_comments_absent_when_not_configured() {
        let temp = TempDir::new().unwrap();
        let archive = packed_sample(&temp, &PackConfig::default());

        let comments = entry_comments(&archive).unwrap();
        assert_eq!(comments.len(), 3);
        assert!(comments.iter().all(Option::is_none));
    }

    #[test]
    fn test_empty_container_path_is_rejected() {
        assert!(matches!(
            entry_names("").unwrap_err(),
            ArchiveError::InvalidArgument { .. }
        ));
        assert!(matches!(
            entry_comments("").unwrap_err(),
            ArchiveError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_garbage_container_is_invalid_archive() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.duf");
        fs::write(&bogus, b"not a gzip stream at all").unwrap();

        let result = entry_names(&bogus);
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::InvalidArchive(_)
        ));
    }
}
