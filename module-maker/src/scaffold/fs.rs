//! Filesystem side of generation: existence guard, directory creation, writes

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Returns true if something already occupies `path`
#[must_use]
pub fn already_exists(path: &Path) -> bool {
    path.exists()
}

/// First file in `dir` whose name ends with `suffix`
///
/// Used for migrations, whose timestamp prefix differs between runs.
#[must_use]
pub fn find_with_suffix(dir: &Path, suffix: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(suffix))
        })
        .collect();
    matches.sort();
    matches.into_iter().next()
}

/// Create every missing ancestor directory of `path`
///
/// # Errors
///
/// Returns [`ScaffoldError::DirectoryCreationFailed`] if the filesystem refuses.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
        return Ok(());
    };

    if parent.is_dir() {
        return Ok(());
    }

    debug!(dir = %parent.display(), "creating directory");
    fs::create_dir_all(parent).map_err(|source| ScaffoldError::DirectoryCreationFailed {
        path: parent.to_path_buf(),
        source,
    })
}

/// Write `content` to a file that must not exist yet
///
/// The file is opened with `create_new`, so a file that appeared after the
/// existence check is reported as [`ScaffoldError::AlreadyExists`] instead of
/// being truncated.
///
/// # Errors
///
/// Returns [`ScaffoldError::AlreadyExists`] or [`ScaffoldError::WriteFailed`].
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                ScaffoldError::AlreadyExists(path.to_path_buf())
            } else {
                ScaffoldError::WriteFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| ScaffoldError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/c/file.php");

        ensure_parent_dir(&path).unwrap();
        assert!(temp_dir.path().join("a/b/c").is_dir());

        // second call is a no-op
        ensure_parent_dir(&path).unwrap();
    }

    #[test]
    fn test_ensure_parent_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a"), "not a dir").unwrap();

        let result = ensure_parent_dir(&temp_dir.path().join("a/b/file.php"));
        assert!(matches!(result, Err(ScaffoldError::DirectoryCreationFailed { .. })));
    }

    #[test]
    fn test_write_new_refuses_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.php");

        write_new(&path, "first").unwrap();
        let second = write_new(&path, "second");

        assert!(matches!(second, Err(ScaffoldError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_find_with_suffix() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_with_suffix(&temp_dir.path().join("missing"), "_x.php").is_none());

        fs::write(temp_dir.path().join("2024_01_01_000000_create_orders_table.php"), "").unwrap();
        fs::write(temp_dir.path().join("2024_01_01_000000_create_users_table.php"), "").unwrap();

        let found = find_with_suffix(temp_dir.path(), "_create_orders_table.php").unwrap();
        assert!(found.ends_with("2024_01_01_000000_create_orders_table.php"));
        assert!(find_with_suffix(temp_dir.path(), "_create_items_table.php").is_none());
    }
}
