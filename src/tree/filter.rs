//! Hidden-entry filtering for tree building

use super::reader::DirectoryEntry;

/// Visibility policy for dotfiles.
///
/// Hidden entries that are filtered out are neither listed nor counted.
#[derive(Debug, Clone, Copy)]
pub struct HiddenFilter {
    show_hidden: bool,
}

impl HiddenFilter {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }

    /// Check if an entry should be shown.
    pub fn is_visible(&self, entry: &DirectoryEntry) -> bool {
        self.show_hidden || !is_hidden(&entry.name)
    }
}

/// A name is hidden when it starts with '.'.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::reader::EntryKind;
    use super::*;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            kind: EntryKind::File,
            extension: String::new(),
            link_target: None,
        }
    }

    #[test]
    fn test_hidden_entries_excluded_by_default() {
        let filter = HiddenFilter::new(false);
        assert!(!filter.is_visible(&entry(".env")));
        assert!(!filter.is_visible(&entry(".git")));
        assert!(filter.is_visible(&entry("main.rs")));
        assert!(filter.is_visible(&entry("dot.in.middle")));
    }

    #[test]
    fn test_show_hidden_keeps_everything() {
        let filter = HiddenFilter::new(true);
        assert!(filter.is_visible(&entry(".env")));
        assert!(filter.is_visible(&entry("main.rs")));
    }
}
