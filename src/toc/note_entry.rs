use std::cmp::Ordering;
use std::time::SystemTime;

use crate::toc::SortKey;

/// A Markdown file found directly inside the scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// Base name including the extension, exactly as listed.
    pub name: String,
    pub created_at: SystemTime,
    pub modified_at: SystemTime,
}

impl NoteEntry {
    /// Newest first by `key`, then by name so equal timestamps keep a fixed order.
    pub fn cmp_by(&self, other: &Self, key: SortKey) -> Ordering {
        key.timestamp_of(other)
            .cmp(&key.timestamp_of(self))
            .then_with(|| self.name.cmp(&other.name))
    }
}

pub fn sort_entries(entries: &mut [NoteEntry], key: SortKey) {
    entries.sort_by(|a, b| a.cmp_by(b, key));
}
