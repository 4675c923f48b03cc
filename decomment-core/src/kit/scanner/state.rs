//! Scan state types

use serde::Serialize;
use std::fmt;

/// Lexical context of the scanner at the current cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain code, the only mode in which comments and literals can open
    #[default]
    Code,
    /// Inside `// ...` up to the next `\n`
    LineComment,
    /// Inside `/* ... */`
    BlockComment,
    /// Inside a double-quoted string
    StringLiteral,
    /// Inside a single-quoted character literal
    CharLiteral,
    /// Inside a `"""` text block
    TextBlock,
}

impl Mode {
    /// Modes whose content is copied verbatim and where `\` escapes the next char
    pub fn is_literal(self) -> bool {
        matches!(self, Mode::StringLiteral | Mode::CharLiteral | Mode::TextBlock)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Mode::LineComment | Mode::BlockComment)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Code => "code",
            Mode::LineComment => "line comment",
            Mode::BlockComment => "block comment",
            Mode::StringLiteral => "string literal",
            Mode::CharLiteral => "char literal",
            Mode::TextBlock => "text block",
        };
        f.write_str(name)
    }
}

/// Mutable state for one transform call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub mode: Mode,
    /// Opening character of the active string literal, `None` outside one
    pub string_delimiter: Option<char>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to `Code` with no delimiter
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn enter(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn open_string(&mut self, delimiter: char) {
        self.mode = Mode::StringLiteral;
        self.string_delimiter = Some(delimiter);
    }

    pub fn close_string(&mut self) {
        self.mode = Mode::Code;
        self.string_delimiter = None;
    }
}

/// Counters for one transform call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize)]
pub struct ScanStats {
    /// `//` comments removed
    pub line_comments: usize,
    /// `/* */` comments removed, including unterminated ones
    pub block_comments: usize,
    /// Characters discarded from comment bodies and delimiters
    pub chars_removed: usize,
}

impl ScanStats {
    pub fn comments(&self) -> usize {
        self.line_comments + self.block_comments
    }
}
