use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;
use crate::toc::SortKey;

/// Insert a table of contents of the notes that share a folder with a document
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The open document, relative to the vault root
    pub document: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The root directory of the vault
    #[clap(long, short, default_value = ".")]
    pub vault: PathBuf,

    /// Timestamp to order notes by, overriding the saved setting
    #[clap(long, short, value_enum)]
    pub sort_key: Option<SortKey>,

    /// Zero-based line to insert the table of contents at. Without it the
    /// table of contents is printed instead
    #[clap(long)]
    pub line: Option<usize>,

    /// Zero-based character within the line
    #[clap(long, requires = "line")]
    pub ch: Option<usize>,

    /// Store a new value for the free-text setting
    #[clap(long)]
    pub set_setting: Option<String>,
}
