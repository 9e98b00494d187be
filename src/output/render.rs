//! Tree to line conversion
//!
//! Produces neutral `(prefix, text, style)` lines. Nothing in here knows
//! about terminals or escape codes.

use std::path::Path;

use termcolor::{Color, ColorSpec};

use crate::tree::{TreeNode, directory_summary_label, file_summary_label};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Presentation class of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Root,
    Directory,
    File,
    Summary,
    Error,
}

impl StyleTag {
    /// Terminal style for this tag.
    pub fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            StyleTag::Root | StyleTag::Directory => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            StyleTag::File => {
                spec.set_fg(Some(Color::Green));
            }
            StyleTag::Summary => {
                spec.set_dimmed(true);
            }
            StyleTag::Error => {
                spec.set_fg(Some(Color::Red)).set_bold(true);
            }
        }
        spec
    }
}

/// One display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub depth: usize,
    /// Branch glyphs, including the connector for non-root lines.
    pub prefix: String,
    pub text: String,
    pub style: StyleTag,
}

impl RenderedLine {
    pub fn plain(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }
}

/// Flatten a built tree into display lines, root first.
pub fn render(root: &TreeNode) -> Vec<RenderedLine> {
    let root_style = match root {
        TreeNode::ErrorLeaf { .. } => StyleTag::Error,
        _ => StyleTag::Root,
    };

    let mut lines = vec![RenderedLine {
        depth: 0,
        prefix: String::new(),
        text: node_text(root),
        style: root_style,
    }];
    render_children(root.children(), "", 1, &mut lines);
    lines
}

fn render_children(children: &[TreeNode], prefix: &str, depth: usize, lines: &mut Vec<RenderedLine>) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        lines.push(RenderedLine {
            depth,
            prefix: format!("{}{}", prefix, connector),
            text: node_text(child),
            style: node_style(child),
        });

        if !child.children().is_empty() {
            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            render_children(child.children(), &child_prefix, depth + 1, lines);
        }
    }
}

fn node_style(node: &TreeNode) -> StyleTag {
    match node {
        TreeNode::FileLeaf { .. } => StyleTag::File,
        TreeNode::DirectoryNode { .. } => StyleTag::Directory,
        TreeNode::FileSummary { .. } | TreeNode::DirectorySummary { .. } => StyleTag::Summary,
        TreeNode::ErrorLeaf { .. } => StyleTag::Error,
    }
}

fn node_text(node: &TreeNode) -> String {
    match node {
        TreeNode::FileLeaf { name, link_target }
        | TreeNode::DirectoryNode {
            name, link_target, ..
        } => entry_text(name, link_target.as_deref()),
        TreeNode::FileSummary { counts, total } => file_summary_label(counts, *total),
        TreeNode::DirectorySummary { count } => directory_summary_label(*count),
        TreeNode::ErrorLeaf {
            name,
            link_target,
            message,
        } => format!("{} [{}]", entry_text(name, link_target.as_deref()), message),
    }
}

fn entry_text(name: &str, link_target: Option<&Path>) -> String {
    match link_target {
        Some(target) if target.as_os_str().is_empty() => format!("{} -> ?", name),
        Some(target) => format!("{} -> {}", name, target.display()),
        None => name.to_string(),
    }
}
