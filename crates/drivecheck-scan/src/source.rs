//! Directory enumeration.

use std::path::{Path, PathBuf};

use drivecheck_core::CheckError;

/// Direct children of one directory, split by kind and sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    /// Full paths of every non-directory entry.
    pub files: Vec<PathBuf>,
    /// Full paths of every subdirectory.
    pub dirs: Vec<PathBuf>,
}

impl DirListing {
    /// Create a listing, sorting both lists by name.
    pub fn new(mut files: Vec<PathBuf>, mut dirs: Vec<PathBuf>) -> Self {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Self { files, dirs }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// Something that can list the direct children of a directory.
///
/// A listing either succeeds completely or fails; a partial listing is never
/// returned.
pub trait DirSource {
    fn list(&self, dir: &Path) -> Result<DirListing, CheckError>;
}

/// Lists directories from the local filesystem.
///
/// Symbolic links are classified by the link itself and never followed, so a
/// link to a directory is checked as a file and cannot introduce cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list(&self, dir: &Path) -> Result<DirListing, CheckError> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in std::fs::read_dir(dir).map_err(|e| CheckError::io(dir, e))? {
            let entry = entry.map_err(|e| CheckError::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| CheckError::io(&path, e))?;

            if file_type.is_dir() {
                dirs.push(path);
            } else {
                files.push(path);
            }
        }

        Ok(DirListing::new(files, dirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fs_source_splits_and_sorts() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir(root.join("zdir")).unwrap();
        fs::create_dir(root.join("adir")).unwrap();

        let listing = FsSource.list(root).unwrap();

        assert_eq!(listing.files, [root.join("a.txt"), root.join("b.txt")]);
        assert_eq!(listing.dirs, [root.join("adir"), root.join("zdir")]);
    }

    #[test]
    fn test_fs_source_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = FsSource.list(&temp.path().join("gone")).unwrap_err();
        assert!(matches!(err, CheckError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let listing = FsSource.list(root).unwrap();

        assert_eq!(listing.files, [root.join("link")]);
        assert_eq!(listing.dirs, [root.join("real")]);
    }

    #[test]
    fn test_empty_listing() {
        let temp = TempDir::new().unwrap();
        assert!(FsSource.list(temp.path()).unwrap().is_empty());
    }
}
