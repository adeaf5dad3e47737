use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::NoteTimestampExt;
use crate::toc::note_entry::sort_entries;
use crate::toc::{NoteEntry, SortKey};

/// File name suffix of a note. Matched case-sensitively.
pub const NOTE_EXTENSION: &str = ".md";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocOptions {
    pub sort_key: SortKey,
}

/// Turns the Markdown files of a single folder into a numbered list of links.
///
/// The builder only reads the filesystem and keeps no state between calls,
/// so one instance can serve any number of invocations.
#[derive(Debug, Clone, Default)]
pub struct TocBuilder {
    options: TocOptions,
}

impl TocBuilder {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }

    /// Lists the notes of `directory` and renders them as a table of contents.
    ///
    /// Returns an empty string when the folder holds no notes.
    pub fn build_toc(&self, directory: &Path) -> Result<String, FilesystemError> {
        let entries = self.list_notes(directory)?;
        Ok(render_toc(&entries))
    }

    /// Collects the notes directly inside `directory`, sorted newest first by
    /// the configured key.
    pub fn list_notes(&self, directory: &Path) -> Result<Vec<NoteEntry>, FilesystemError> {
        debug!("Listing notes in {}", directory.display());
        let listing = fs::read_dir(directory).context(ReadDirectorySnafu {
            path: directory.to_path_buf(),
        })?;

        let mut entries = Vec::new();
        for dir_entry in listing {
            let dir_entry = dir_entry.context(ReadEntrySnafu {
                path: directory.to_path_buf(),
            })?;
            let path = dir_entry.path();

            // Symlinks report their own type here, so they are skipped too
            let file_type = dir_entry.file_type().context(ReadMetadataSnafu { path: &path })?;
            if !file_type.is_file() {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }

            let Ok(name) = dir_entry.file_name().into_string() else {
                debug!("Skipping file with a non UTF-8 name {}", path.display());
                continue;
            };
            if !is_note_name(&name) {
                debug!("Skipping non-note file {}", name);
                continue;
            }

            entries.push(Self::read_entry(name, path)?);
        }

        sort_entries(&mut entries, self.options.sort_key);
        debug!(
            "Found {} notes in {}, sorted by {}",
            entries.len(),
            directory.display(),
            self.options.sort_key
        );
        Ok(entries)
    }

    fn read_entry(name: String, path: PathBuf) -> Result<NoteEntry, FilesystemError> {
        let metadata = fs::metadata(&path).context(ReadMetadataSnafu { path: &path })?;
        let created_at = metadata.creation_time().context(ReadTimestampSnafu {
            path: &path,
            timestamp: "creation",
        })?;
        let modified_at = metadata.modified().context(ReadTimestampSnafu {
            path: &path,
            timestamp: "modification",
        })?;

        Ok(NoteEntry {
            name,
            created_at,
            modified_at,
        })
    }
}

pub fn is_note_name(name: &str) -> bool {
    name.ends_with(NOTE_EXTENSION)
}

/// Renders `entries` in order as `"<n>. [[<name>]]\n"` lines, numbered from 1.
pub fn render_toc(entries: &[NoteEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. [[{}]]\n", index + 1, entry.name))
        .collect()
}

#[derive(Debug, Snafu)]
pub enum FilesystemError {
    #[snafu(display("Failed to read directory {}", path.display()))]
    ReadDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read an entry of directory {}", path.display()))]
    ReadEntryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read metadata of {}", path.display()))]
    ReadMetadataError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {} time of {}", timestamp, path.display()))]
    ReadTimestampError {
        path: PathBuf,
        timestamp: &'static str,
        source: std::io::Error,
    },
}
