//! Directory listing
//!
//! Reads the immediate children of a single directory and classifies each
//! one as a file or a subdirectory. Nothing here recurses.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReadError;

/// What a directory entry is, after resolving symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a directory, as seen by a single listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Lower-cased extension without the dot. Empty for directories and for
    /// files without one.
    pub extension: String,
    /// Raw link text when the entry is a symbolic link.
    pub link_target: Option<PathBuf>,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.link_target.is_some()
    }
}

/// Source of directory listings.
///
/// The builder only ever talks to the filesystem through this trait.
pub trait ReadDir {
    /// List the immediate children of `path`, sorted by name.
    fn read_entries(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ReadError>;
}

/// Reads real directories with `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ReadDir for FsReader {
    fn read_entries(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ReadError> {
        let dir = fs::read_dir(path).map_err(|e| ReadError::new(path, e))?;

        let mut entries = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|e| ReadError::new(path, e))?;
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = entry.path();
            entries.push(classify(name, entry_path, entry.file_type().ok()));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

fn classify(name: String, path: PathBuf, file_type: Option<fs::FileType>) -> DirectoryEntry {
    let is_symlink = file_type.is_some_and(|ft| ft.is_symlink());

    let (kind, link_target, resolvable) = if is_symlink {
        let target = fs::read_link(&path).ok();
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => (EntryKind::Directory, target, true),
            Ok(_) => (EntryKind::File, target, true),
            // Broken or looping link
            Err(_) => (EntryKind::File, target, false),
        }
    } else if file_type.is_some_and(|ft| ft.is_dir()) {
        (EntryKind::Directory, None, true)
    } else {
        (EntryKind::File, None, true)
    };

    let extension = if kind == EntryKind::File && resolvable {
        extension_of(&name)
    } else {
        String::new()
    };

    DirectoryEntry {
        name,
        path,
        kind,
        extension,
        link_target: link_target.or_else(|| is_symlink.then(PathBuf::new)),
    }
}

/// Lower-cased extension of a file name, or an empty string.
///
/// Dotfiles such as `.bashrc` and names ending in `.` have no extension.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
