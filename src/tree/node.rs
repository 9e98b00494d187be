//! Built tree representation
//!
//! The tree is produced once by `TreeBuilder` and never mutated. It is
//! serializable so the same structure backs both console and JSON output.

use std::path::PathBuf;

use serde::Serialize;

/// Number of files sharing one extension inside a collapsed file group.
///
/// An empty `extension` is the bucket for files without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: String,
    pub count: usize,
}

impl ExtensionCount {
    pub fn new(extension: impl Into<String>, count: usize) -> Self {
        Self {
            extension: extension.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    FileLeaf {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link_target: Option<PathBuf>,
    },
    FileSummary {
        counts: Vec<ExtensionCount>,
        total: usize,
    },
    DirectoryNode {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link_target: Option<PathBuf>,
        children: Vec<TreeNode>,
    },
    DirectorySummary {
        count: usize,
    },
    ErrorLeaf {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link_target: Option<PathBuf>,
        message: String,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::FileLeaf {
            name: name.into(),
            link_target: None,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::DirectoryNode {
            name: name.into(),
            link_target: None,
            children,
        }
    }

    /// Name of an individually listed entry; summaries have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            TreeNode::FileLeaf { name, .. }
            | TreeNode::DirectoryNode { name, .. }
            | TreeNode::ErrorLeaf { name, .. } => Some(name),
            TreeNode::FileSummary { .. } | TreeNode::DirectorySummary { .. } => None,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::DirectoryNode { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(
            self,
            TreeNode::FileSummary { .. } | TreeNode::DirectorySummary { .. }
        )
    }
}
