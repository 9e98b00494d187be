//! Directory tree building
//!
//! Reads a directory hierarchy into an immutable [`TreeNode`] tree,
//! collapsing crowded levels into summaries:
//!
//! - `reader` lists one directory at a time
//! - `filter` hides dotfiles
//! - `summary` decides between listing entries and counting them
//! - `builder` ties these together recursively

mod builder;
mod config;
mod filter;
mod node;
mod reader;
mod summary;

pub use builder::{TreeBuilder, check_root, display_name};
pub use config::{BuildConfig, Limit};
pub use filter::{HiddenFilter, is_hidden};
pub use node::{ExtensionCount, TreeNode};
pub use reader::{DirectoryEntry, EntryKind, FsReader, ReadDir, extension_of};
pub use summary::{
    DirectoryPlan, NO_EXTENSION_LABEL, count_extensions, directory_summary_label,
    file_summary_label, plan_directories, summarize_files,
};
