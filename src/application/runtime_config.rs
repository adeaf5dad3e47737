use std::path::PathBuf;

use crate::cli::Cli;
use crate::host::CursorPosition;
use crate::toc::SortKey;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub document: PathBuf,
    pub vault: PathBuf,
    /// Overrides the saved sort key when set
    pub sort_key: Option<SortKey>,
    /// Insert into the document here; print the TOC when unset
    pub cursor: Option<CursorPosition>,
    pub set_setting: Option<String>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            document: cli.document,
            vault: cli.vault,
            sort_key: cli.sort_key,
            cursor: cli
                .line
                .map(|line| CursorPosition::new(line, cli.ch.unwrap_or_default())),
            set_setting: cli.set_setting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cursor_is_built_from_line_and_character() {
        let cli = Cli::try_parse_from(["tocnote", "index.md", "--line", "2", "--ch", "5"])
            .expect("Failed to parse");

        let config: RuntimeConfig = cli.into();

        assert_eq!(config.cursor, Some(CursorPosition::new(2, 5)));
    }

    #[test]
    fn test_character_defaults_to_line_start() {
        let cli = Cli::try_parse_from(["tocnote", "index.md", "--line", "4"])
            .expect("Failed to parse");

        let config: RuntimeConfig = cli.into();

        assert_eq!(config.cursor, Some(CursorPosition::new(4, 0)));
    }

    #[test]
    fn test_no_line_means_no_cursor() {
        let cli = Cli::try_parse_from(["tocnote", "index.md"]).expect("Failed to parse");

        let config: RuntimeConfig = cli.into();

        assert_eq!(config.cursor, None);
    }
}
