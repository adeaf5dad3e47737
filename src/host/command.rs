use std::path::Path;

use tracing::{debug, info, warn};

use crate::host::{Editor, PathResolver};
use crate::toc::{TocBuilder, render_toc};

pub const COMMAND_ID: &str = "add-toc-notes";
pub const COMMAND_NAME: &str = "Create table of contents page";

/// What running [`CreateTocCommand`] did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The table of contents was inserted at the cursor.
    Inserted { entries: usize },
    /// The folder holds no notes; the editor was left untouched.
    Empty,
    /// The folder could not be resolved or read; the editor was left untouched.
    Failed,
}

/// Inserts a table of contents of the open document's folder at the cursor.
///
/// Failures are logged at `warn` and leave the editor untouched.
#[derive(Debug, Clone)]
pub struct CreateTocCommand<R> {
    builder: TocBuilder,
    resolver: R,
}

impl<R: PathResolver> CreateTocCommand<R> {
    pub fn new(builder: TocBuilder, resolver: R) -> Self {
        Self { builder, resolver }
    }

    pub fn run(&self, document: &Path, editor: &mut impl Editor) -> CommandOutcome {
        debug!("Running '{}' for {}", COMMAND_NAME, document.display());

        let folder = match self.resolver.resolve_folder(document) {
            Ok(folder) => folder,
            Err(err) => {
                warn!("Could not resolve the folder of the document: {}", err);
                return CommandOutcome::Failed;
            }
        };

        let entries = match self.builder.list_notes(&folder) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Could not build a table of contents: {}", err);
                return CommandOutcome::Failed;
            }
        };

        if entries.is_empty() {
            info!("No notes in {}, nothing to insert", folder.display());
            return CommandOutcome::Empty;
        }

        let cursor = editor.cursor();
        editor.replace_range(&render_toc(&entries), cursor);
        info!(
            "Inserted a table of contents with {} entries at {}",
            entries.len(),
            cursor
        );
        CommandOutcome::Inserted {
            entries: entries.len(),
        }
    }
}
