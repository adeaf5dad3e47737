//! Table of contents for the notes of a single folder.
//!
//! Only the direct children of the folder are considered; subfolders are
//! never descended into.

mod note_entry;
mod sort_key;
mod toc_builder;

pub use note_entry::NoteEntry;
pub use sort_key::SortKey;
pub use toc_builder::{
    FilesystemError, NOTE_EXTENSION, TocBuilder, TocOptions, is_note_name, render_toc,
};
