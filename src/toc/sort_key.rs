use std::time::SystemTime;

use clap::ValueEnum;
use derive_more::Display;

use crate::toc::NoteEntry;

/// Timestamp the table of contents is ordered by, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
pub enum SortKey {
    #[default]
    #[display("created")]
    #[value(name = "created")]
    CreatedAt,
    #[display("modified")]
    #[value(name = "modified")]
    ModifiedAt,
}

impl SortKey {
    /// Parses the name used in the settings file and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "created" => Some(SortKey::CreatedAt),
            "modified" => Some(SortKey::ModifiedAt),
            _ => None,
        }
    }

    pub fn timestamp_of(&self, entry: &NoteEntry) -> SystemTime {
        match self {
            SortKey::CreatedAt => entry.created_at,
            SortKey::ModifiedAt => entry.modified_at,
        }
    }
}
