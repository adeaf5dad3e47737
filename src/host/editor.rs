use derive_more::Display;

/// Zero-based position in a document. `ch` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[display("{line}:{ch}")]
pub struct CursorPosition {
    pub line: usize,
    pub ch: usize,
}

impl CursorPosition {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// The editing primitives the host hands to a command.
pub trait Editor {
    fn cursor(&self) -> CursorPosition;
    /// Inserts `text` at `at`. Positions past the end of a line or of the
    /// document are clamped.
    fn replace_range(&mut self, text: &str, at: CursorPosition);
}

/// Plain-text document held in memory, with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    cursor: CursorPosition,
}

impl TextDocument {
    pub fn new(text: impl Into<String>, cursor: CursorPosition) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn byte_offset(&self, at: CursorPosition) -> usize {
        let mut line_start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            if index == at.line {
                let content = line.strip_suffix('\r').unwrap_or(line);
                let within_line = content
                    .char_indices()
                    .nth(at.ch)
                    .map(|(offset, _)| offset)
                    .unwrap_or(content.len());
                return line_start + within_line;
            }
            line_start += line.len() + 1;
        }
        self.text.len()
    }
}

impl Editor for TextDocument {
    fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn replace_range(&mut self, text: &str, at: CursorPosition) {
        let offset = self.byte_offset(at);
        self.text.insert_str(offset, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", CursorPosition::new(0, 0), "X")]
    #[case("# Index\n\nfooter\n", CursorPosition::new(1, 0), "# Index\nX\nfooter\n")]
    #[case("# Index\n", CursorPosition::new(0, 2), "# XIndex\n")]
    #[case("# Index\n", CursorPosition::new(0, 99), "# IndexX\n")]
    #[case("# Index\n", CursorPosition::new(1, 0), "# Index\nX")]
    #[case("# Index", CursorPosition::new(7, 3), "# IndexX")]
    #[case("ノート\n", CursorPosition::new(0, 1), "ノXート\n")]
    #[case("a\r\nb\r\n", CursorPosition::new(0, 5), "aX\r\nb\r\n")]
    fn test_inserts_at_clamped_position(
        #[case] text: &str,
        #[case] at: CursorPosition,
        #[case] expected: &str,
    ) {
        let mut document = TextDocument::new(text, CursorPosition::default());

        document.replace_range("X", at);

        assert_eq!(document.text(), expected);
    }

    #[test]
    fn test_cursor_is_reported_unchanged_after_insert() {
        let cursor = CursorPosition::new(1, 0);
        let mut document = TextDocument::new("title\n\n", cursor);

        document.replace_range("1. [[a.md]]\n", cursor);

        assert_eq!(document.cursor(), cursor);
        assert_eq!(document.into_text(), "title\n1. [[a.md]]\n\n");
    }

    #[test]
    fn test_cursor_position_display() {
        assert_eq!(CursorPosition::new(3, 14).to_string(), "3:14");
    }
}
