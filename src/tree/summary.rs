//! Collapse decisions and summary labels
//!
//! Each directory level gets two independent decisions: one for its files
//! and one for its subdirectories. A summary always replaces the whole
//! category, never a remainder of it.

use std::collections::BTreeMap;

use super::config::Limit;
use super::node::{ExtensionCount, TreeNode};
use super::reader::DirectoryEntry;

/// Label used for files that have no extension.
pub const NO_EXTENSION_LABEL: &str = "no extension";

/// What to do with the subdirectories of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryPlan {
    /// No visible subdirectories.
    Nothing,
    /// List and descend into every subdirectory.
    Expand,
    /// Replace them all with a single count.
    Collapse(usize),
}

/// Decide how a level's subdirectories are shown.
pub fn plan_directories(count: usize, limit: Limit) -> DirectoryPlan {
    if count == 0 {
        DirectoryPlan::Nothing
    } else if limit.admits(count) {
        DirectoryPlan::Expand
    } else {
        DirectoryPlan::Collapse(count)
    }
}

/// Turn a level's visible files (already sorted by name) into nodes.
///
/// Returns no nodes for an empty slice, one leaf per file when the limit
/// admits them all, and otherwise exactly one `FileSummary`.
pub fn summarize_files(files: &[DirectoryEntry], limit: Limit) -> Vec<TreeNode> {
    if files.is_empty() {
        return Vec::new();
    }

    if limit.admits(files.len()) {
        return files
            .iter()
            .map(|f| TreeNode::FileLeaf {
                name: f.name.clone(),
                link_target: f.link_target.clone(),
            })
            .collect();
    }

    vec![TreeNode::FileSummary {
        counts: count_extensions(files.iter().map(|f| f.extension.as_str())),
        total: files.len(),
    }]
}

/// Group extensions and order them by descending count, then ascending
/// extension. The empty extension sorts last among equal counts.
pub fn count_extensions<'a>(extensions: impl IntoIterator<Item = &'a str>) -> Vec<ExtensionCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ext in extensions {
        *counts.entry(ext).or_default() += 1;
    }

    let mut grouped: Vec<ExtensionCount> = counts
        .into_iter()
        .map(|(ext, count)| ExtensionCount::new(ext, count))
        .collect();

    grouped.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.extension.is_empty().cmp(&b.extension.is_empty()))
            .then_with(|| a.extension.cmp(&b.extension))
    });
    grouped
}

/// `"4 py, 1 sh files"`
pub fn file_summary_label(counts: &[ExtensionCount], total: usize) -> String {
    let parts: Vec<String> = counts
        .iter()
        .map(|c| {
            let ext = if c.extension.is_empty() {
                NO_EXTENSION_LABEL
            } else {
                c.extension.as_str()
            };
            format!("{} {}", c.count, ext)
        })
        .collect();

    let noun = if total == 1 { "file" } else { "files" };
    if parts.is_empty() {
        format!("{} {}", total, noun)
    } else {
        format!("{} {}", parts.join(", "), noun)
    }
}

/// `"3 directories"` or `"1 directory"`
pub fn directory_summary_label(count: usize) -> String {
    let noun = if count == 1 { "directory" } else { "directories" };
    format!("{} {}", count, noun)
}
