//! TreeBuilder - builds the summarized tree in memory

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::InvalidRootError;
use crate::progress::ScanObserver;

use super::config::BuildConfig;
use super::filter::HiddenFilter;
use super::node::TreeNode;
use super::reader::{DirectoryEntry, FsReader, ReadDir};
use super::summary::{DirectoryPlan, plan_directories, summarize_files};

/// Builds a [`TreeNode`] tree for a root directory.
///
/// Each directory is read once. Files come first, then subdirectories, and
/// either category may collapse into a single summary node. Collapsed
/// subdirectories are never read.
pub struct TreeBuilder<R = FsReader> {
    config: BuildConfig,
    reader: R,
}

impl TreeBuilder<FsReader> {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            reader: FsReader,
        }
    }
}

impl<R: ReadDir> TreeBuilder<R> {
    /// Swap the directory reader.
    pub fn with_reader<S: ReadDir>(self, reader: S) -> TreeBuilder<S> {
        TreeBuilder {
            config: self.config,
            reader,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn build(&self, root: &Path) -> Result<TreeNode, InvalidRootError> {
        self.build_observed(root, &mut ())
    }

    /// Build the tree, reporting counts to `observer` after every read.
    pub fn build_observed(
        &self,
        root: &Path,
        observer: &mut dyn ScanObserver,
    ) -> Result<TreeNode, InvalidRootError> {
        check_root(root)?;

        let mut visited = HashSet::new();
        if self.config.follow_links {
            if let Ok(canonical) = root.canonicalize() {
                visited.insert(canonical);
            }
        }

        tracing::debug!(root = %root.display(), config = ?self.config, "building tree");
        Ok(self.build_dir(
            root,
            display_name(root),
            None,
            &self.config,
            observer,
            &mut visited,
        ))
    }

    fn build_dir(
        &self,
        path: &Path,
        name: String,
        link_target: Option<PathBuf>,
        config: &BuildConfig,
        observer: &mut dyn ScanObserver,
        visited: &mut HashSet<PathBuf>,
    ) -> TreeNode {
        let entries = match self.reader.read_entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("{}", err);
                return TreeNode::ErrorLeaf {
                    name,
                    link_target,
                    message: err.short_message(),
                };
            }
        };

        let filter = HiddenFilter::new(config.show_hidden);
        let (dirs, files): (Vec<DirectoryEntry>, Vec<DirectoryEntry>) = entries
            .into_iter()
            .filter(|e| filter.is_visible(e))
            .partition(DirectoryEntry::is_dir);

        tracing::debug!(
            path = %path.display(),
            dirs = dirs.len(),
            files = files.len(),
            "read directory"
        );
        observer.entries_found(dirs.len(), files.len());

        let mut children = summarize_files(&files, config.max_files);

        match plan_directories(dirs.len(), config.max_dirs) {
            DirectoryPlan::Nothing => {}
            DirectoryPlan::Expand => {
                for dir in dirs {
                    children.push(self.build_subdir(dir, config, observer, visited));
                }
            }
            DirectoryPlan::Collapse(count) => {
                children.push(TreeNode::DirectorySummary { count });
            }
        }

        TreeNode::DirectoryNode {
            name,
            link_target,
            children,
        }
    }

    fn build_subdir(
        &self,
        entry: DirectoryEntry,
        config: &BuildConfig,
        observer: &mut dyn ScanObserver,
        visited: &mut HashSet<PathBuf>,
    ) -> TreeNode {
        let unexpanded = |entry: DirectoryEntry| TreeNode::DirectoryNode {
            name: entry.name,
            link_target: entry.link_target,
            children: Vec::new(),
        };

        if entry.is_symlink() && !config.follow_links {
            return unexpanded(entry);
        }

        if config.follow_links {
            // A failed canonicalize surfaces as a read error below
            if let Ok(canonical) = entry.path.canonicalize() {
                if !visited.insert(canonical) {
                    tracing::debug!(path = %entry.path.display(), "already visited, not descending");
                    return unexpanded(entry);
                }
            }
        }

        self.build_dir(
            &entry.path,
            entry.name,
            entry.link_target,
            config,
            observer,
            visited,
        )
    }
}

/// Reject a root that is missing, is not a directory, or cannot be stat'ed.
pub fn check_root(root: &Path) -> Result<(), InvalidRootError> {
    let path = root.to_path_buf();
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(InvalidRootError::NotADirectory { path }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(InvalidRootError::NotFound { path }),
        Err(source) => Err(InvalidRootError::Inaccessible { path, source }),
    }
}

/// Label for the root line: "." for the current directory, otherwise the
/// path as given without trailing slashes.
pub fn display_name(root: &Path) -> String {
    let text = root.to_string_lossy();
    if text.is_empty() || text == "." {
        return ".".to_string();
    }
    let trimmed = text.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
