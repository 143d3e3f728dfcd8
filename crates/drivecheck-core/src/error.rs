//! Error types for checking operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while checking a tree.
///
/// Inside a walk these never escape: the walker turns them into a
/// [`Violation`](crate::Violation) on the directory that failed. Only root
/// validation surfaces them to the caller.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl CheckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_error_io_permission() {
        let err = CheckError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CheckError::PermissionDenied { .. }));
        assert_eq!(err.to_string(), "Permission denied: /test/path");
    }

    #[test]
    fn test_check_error_io_other_keeps_source() {
        let err = CheckError::io("/test/path", std::io::Error::other("disk on fire"));
        assert!(matches!(err, CheckError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error at /test/path: disk on fire");
    }
}
