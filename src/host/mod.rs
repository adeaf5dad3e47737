//! Capabilities the editor host provides, and the command it invokes.

mod command;
mod editor;
mod path_resolver;

pub use command::{COMMAND_ID, COMMAND_NAME, CommandOutcome, CreateTocCommand};
pub use editor::{CursorPosition, Editor, TextDocument};
pub use path_resolver::{PathResolver, ResolveError, VaultPathResolver};
