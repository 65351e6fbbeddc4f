// Input tree discovery

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::SourceFile;
use crate::config::WalkOrder;
use crate::errors::Result;

/// Collect every file under `root`, recursively.
///
/// Regular files are taken as-is. Symlinks are not descended into, but a
/// link that does not point at a directory is treated as a file, so a
/// dangling link fails later when it is read. Sockets, FIFOs and devices
/// are skipped.
pub fn discover(root: &Path, order: WalkOrder) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();

        let is_file = if file_type.is_symlink() {
            !fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            file_type.is_file()
        };

        if is_file {
            files.push(SourceFile::new(entry.into_path()));
        } else if !file_type.is_dir() {
            debug!("Skipping special file: {}", entry.path().display());
        }
    }

    if order == WalkOrder::Sorted {
        files.sort_by(|a, b| a.path.cmp(&b.path));
    }

    debug!(count = files.len(), ?order, "Discovered input files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("post/fx")).unwrap();
        fs::write(dir.path().join("vertex.glsl"), "v").unwrap();
        fs::write(dir.path().join("a.frag"), "f").unwrap();
        fs::write(dir.path().join("post/blur.glsl"), "b").unwrap();
        fs::write(dir.path().join("post/fx/bloom.glsl"), "b").unwrap();
        dir
    }

    fn relative(root: &Path, files: &[SourceFile]) -> Vec<PathBuf> {
        files
            .iter()
            .map(|f| f.path.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn test_sorted_order_is_by_path() {
        let dir = tree();
        let files = discover(dir.path(), WalkOrder::Sorted).unwrap();
        assert_eq!(
            relative(dir.path(), &files),
            vec![
                PathBuf::from("a.frag"),
                PathBuf::from("post/blur.glsl"),
                PathBuf::from("post/fx/bloom.glsl"),
                PathBuf::from("vertex.glsl"),
            ]
        );
    }

    #[test]
    fn test_walk_order_finds_same_files() {
        let dir = tree();
        let mut walked = relative(dir.path(), &discover(dir.path(), WalkOrder::Walk).unwrap());
        let sorted = relative(dir.path(), &discover(dir.path(), WalkOrder::Sorted).unwrap());
        walked.sort();
        assert_eq!(walked, sorted);
    }

    #[test]
    fn test_paths_keep_root_as_given() {
        let dir = tree();
        let files = discover(dir.path(), WalkOrder::Sorted).unwrap();
        assert!(files.iter().all(|f| f.path.starts_with(dir.path())));
    }

    #[test]
    fn test_directories_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();
        let files = discover(dir.path(), WalkOrder::Sorted).unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_is_skipped() {
        let dir = tree();
        let fifo = dir.path().join("pipe.glsl");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .expect("mkfifo should be available");
        assert!(status.success());

        let files = relative(dir.path(), &discover(dir.path(), WalkOrder::Sorted).unwrap());
        assert_eq!(files.len(), 4);
        assert!(!files.contains(&PathBuf::from("pipe.glsl")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_included_but_linked_dir_is_not_walked() {
        use std::os::unix::fs::symlink;

        let dir = tree();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("extra.glsl"), "x").unwrap();
        symlink(outside.path().join("extra.glsl"), dir.path().join("link.glsl")).unwrap();
        symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

        let files = relative(dir.path(), &discover(dir.path(), WalkOrder::Sorted).unwrap());
        assert!(files.contains(&PathBuf::from("link.glsl")));
        assert!(!files.iter().any(|p| p.starts_with("linked_dir")));
    }
}
