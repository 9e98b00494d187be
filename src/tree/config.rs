//! Configuration types for tree building

use std::fmt;
use std::str::FromStr;

/// Threshold for listing entries individually.
///
/// `AtMost(0)` always collapses. `Unlimited` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    Unlimited,
    AtMost(usize),
}

impl Limit {
    /// Whether `count` sibling entries may be listed one by one.
    pub fn admits(self, count: usize) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::AtMost(0) => false,
            Limit::AtMost(max) => count <= max,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => f.write_str("unlimited"),
            Limit::AtMost(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Limit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "unlimited" | "none" | "inf" => Ok(Limit::Unlimited),
            _ => s.parse::<usize>().map(Limit::AtMost).map_err(|_| {
                format!(
                    "expected a non-negative integer or 'unlimited', got '{}'",
                    s
                )
            }),
        }
    }
}

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Maximum number of files listed individually per directory
    pub max_files: Limit,
    /// Maximum number of subdirectories listed individually per directory
    pub max_dirs: Limit,
    /// Include entries whose name starts with '.'
    pub show_hidden: bool,
    /// Descend into symlinked directories (cycles are cut by canonical path)
    pub follow_links: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_files: Limit::AtMost(1),
            max_dirs: Limit::AtMost(20),
            show_hidden: false,
            follow_links: false,
        }
    }
}
