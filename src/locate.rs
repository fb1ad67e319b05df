//! Locating the suite checkout on disk.
//!
//! The walk is top-down with siblings visited in file-name order, so when several
//! directories carry the target name the result is still deterministic: the first
//! visited parent that has one as a child wins.

use crate::error::{PerfError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Default directory name searched for under the root.
pub const SUITE_DIR_NAME: &str = "collabora-online";

/// Find the first directory named `target_name` anywhere under `root`.
pub fn find_named_directory(root: &Path, target_name: &str) -> Result<PathBuf> {
    // A missing or unreadable root is reported as-is instead of "not found".
    std::fs::read_dir(root)?;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let candidate = entry.path().join(target_name);
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "found {target_name}");
            return Ok(candidate);
        }
    }

    Err(PerfError::DirectoryNotFound {
        root: root.to_path_buf(),
        name: target_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("src").join("work").join(SUITE_DIR_NAME);
        fs::create_dir_all(&target).unwrap();

        let found = find_named_directory(tmp.path(), SUITE_DIR_NAME).unwrap();
        assert_eq!(found, target);
    }

    #[test]
    fn finds_direct_child_of_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(SUITE_DIR_NAME)).unwrap();

        let found = find_named_directory(tmp.path(), SUITE_DIR_NAME).unwrap();
        assert_eq!(found, tmp.path().join(SUITE_DIR_NAME));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b")).unwrap();

        let err = find_named_directory(tmp.path(), SUITE_DIR_NAME).unwrap_err();
        assert!(matches!(err, PerfError::DirectoryNotFound { .. }));
    }

    #[test]
    fn regular_file_with_target_name_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SUITE_DIR_NAME), "not a dir").unwrap();

        let err = find_named_directory(tmp.path(), SUITE_DIR_NAME).unwrap_err();
        assert!(matches!(err, PerfError::DirectoryNotFound { .. }));
    }

    #[test]
    fn match_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Collabora-Online")).unwrap();

        assert!(find_named_directory(tmp.path(), SUITE_DIR_NAME).is_err());
    }

    #[test]
    fn earlier_sibling_wins_when_several_match() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("alpha").join(SUITE_DIR_NAME);
        let second = tmp.path().join("beta").join(SUITE_DIR_NAME);
        fs::create_dir_all(&second).unwrap();
        fs::create_dir_all(&first).unwrap();

        let found = find_named_directory(tmp.path(), SUITE_DIR_NAME).unwrap();
        assert_eq!(found, first);
    }

    #[test]
    fn missing_root_propagates_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = find_named_directory(&tmp.path().join("nope"), SUITE_DIR_NAME).unwrap_err();
        assert!(matches!(err, PerfError::Io(_)));
    }
}
