//! Error types for tree building
//!
//! Only [`InvalidRootError`] aborts a run. [`ReadError`] is local to one
//! directory and ends up in the tree as an error leaf.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The root path is missing, is not a directory, or cannot be inspected.
#[derive(Error, Debug)]
pub enum InvalidRootError {
    #[error("path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot access {}: {source}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A directory below the root could not be listed.
#[derive(Error, Debug)]
#[error("cannot read directory {}: {source}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl ReadError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Short cause shown next to the directory name in the tree.
    pub fn short_message(&self) -> String {
        match self.source.kind() {
            io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            io::ErrorKind::NotFound => "no longer exists".to_string(),
            io::ErrorKind::NotADirectory => "not a directory".to_string(),
            _ => self.source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_messages() {
        let missing = InvalidRootError::NotFound {
            path: PathBuf::from("nope"),
        };
        assert_eq!(missing.to_string(), "path does not exist: nope");

        let file = InvalidRootError::NotADirectory {
            path: PathBuf::from("Cargo.toml"),
        };
        assert_eq!(file.to_string(), "not a directory: Cargo.toml");

        let denied = InvalidRootError::Inaccessible {
            path: PathBuf::from("secret/x"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(denied.to_string().starts_with("cannot access secret/x: "));
    }

    #[test]
    fn test_read_error_short_message() {
        let denied = ReadError::new("secret", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.short_message(), "permission denied");

        let gone = ReadError::new("gone", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(gone.short_message(), "no longer exists");
        assert!(gone.to_string().starts_with("cannot read directory gone:"));
    }
}
