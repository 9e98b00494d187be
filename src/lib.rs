//! ttree - a directory tree that collapses crowded levels into counts

pub mod error;
pub mod output;
pub mod progress;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{InvalidRootError, ReadError};
pub use output::{OutputConfig, RenderedLine, StyleTag, TreeFormatter, print_json, render};
pub use progress::{ScanCounts, ScanObserver, Spinner};
pub use tree::{BuildConfig, Limit, TreeBuilder, TreeNode};
