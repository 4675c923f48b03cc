//! Comment-stripping scanner
//!
//! Single pass over the input with a lookahead of at most three characters.
//! Comments are dropped, everything else (including every line terminator,
//! even those inside comments) is copied through, so the output has the same
//! line count as the input.
//!
//! Rules are tried in priority order for the current [`Mode`]:
//! - literal modes: `\` copies itself and the next char unexamined
//! - text block: `"""` closes, anything else is copied
//! - string / char literal: the matching quote closes
//! - line comment: `\n` closes and is kept
//! - block comment: `*/` closes, line terminators are kept
//! - code: `"""` + whitespace/end opens a text block, `//` opens a line
//!   comment unless a URL scheme was just emitted, `/*` opens a block
//!   comment, `"` and `'` open literals
//!
//! Unterminated constructs run to end of input; nothing is an error.

use super::filter::SourceFilter;
use super::state::{Mode, ScanState, ScanStats};
use super::url::follows_url_scheme;

use tracing::{debug, trace};

const ESCAPE: char = '\\';
const STRING_QUOTE: char = '"';
const CHAR_QUOTE: char = '\'';
const TEXT_BLOCK_QUOTES: usize = 3;

/// Reusable comment stripper
///
/// State lives in the scanner and is reset by every [`transform`](Self::transform)
/// call. Share nothing across threads: give each worker its own scanner.
#[derive(Debug, Clone, Default)]
pub struct CommentScanner {
    state: ScanState,
    stats: ScanStats,
}

impl CommentScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state (after a transform: the mode the input ended in)
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Counters from the last transform
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.stats = ScanStats::default();
    }

    /// Strip comments from `input`
    pub fn transform(&mut self, input: &str) -> String {
        self.reset();

        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len());
        let mut i = 0;

        trace!(target: "decomment::scanner", len = chars.len(), "Starting scan");

        while i < chars.len() {
            i += self.step(&chars, i, &mut out);
        }

        if self.state.mode.is_comment() {
            debug!(
                target: "decomment::scanner",
                mode = %self.state.mode,
                "Input ended inside an unterminated comment"
            );
        } else if self.state.mode.is_literal() {
            debug!(
                target: "decomment::scanner",
                mode = %self.state.mode,
                "Input ended inside an unterminated literal"
            );
        }
        debug!(
            target: "decomment::scanner",
            line_comments = self.stats.line_comments,
            block_comments = self.stats.block_comments,
            removed = self.stats.chars_removed,
            "Scan completed"
        );

        out
    }

    /// Apply exactly one rule at `chars[i]`, returning how many chars were consumed
    fn step(&mut self, chars: &[char], i: usize, out: &mut String) -> usize {
        let c = chars[i];
        let mode = self.state.mode;

        if mode.is_literal() && c == ESCAPE {
            if let Some(&next) = chars.get(i + 1) {
                out.push(c);
                out.push(next);
                return 2;
            }
        }

        match mode {
            Mode::TextBlock => self.step_text_block(chars, i, out),
            Mode::StringLiteral => {
                out.push(c);
                if Some(c) == self.state.string_delimiter {
                    self.state.close_string();
                }
                1
            }
            Mode::CharLiteral => {
                out.push(c);
                if c == CHAR_QUOTE {
                    self.state.enter(Mode::Code);
                }
                1
            }
            Mode::LineComment => {
                if c == '\n' {
                    out.push(c);
                    self.state.enter(Mode::Code);
                } else {
                    self.discard_in_comment(c, out);
                }
                1
            }
            Mode::BlockComment => {
                if c == '*' && peek(chars, i + 1) == Some('/') {
                    self.stats.chars_removed += 2;
                    self.state.enter(Mode::Code);
                    2
                } else {
                    self.discard_in_comment(c, out);
                    1
                }
            }
            Mode::Code => self.step_code(chars, i, out),
        }
    }

    fn step_text_block(&mut self, chars: &[char], i: usize, out: &mut String) -> usize {
        if is_triple_quote(chars, i) {
            out.push_str("\"\"\"");
            self.state.enter(Mode::Code);
            TEXT_BLOCK_QUOTES
        } else {
            out.push(chars[i]);
            1
        }
    }

    fn step_code(&mut self, chars: &[char], i: usize, out: &mut String) -> usize {
        let c = chars[i];

        if is_triple_quote(chars, i)
            && peek(chars, i + TEXT_BLOCK_QUOTES).map_or(true, char::is_whitespace)
        {
            out.push_str("\"\"\"");
            self.state.enter(Mode::TextBlock);
            return TEXT_BLOCK_QUOTES;
        }

        if c == '/' {
            match peek(chars, i + 1) {
                Some('/') if !follows_url_scheme(out) => {
                    self.stats.line_comments += 1;
                    self.stats.chars_removed += 2;
                    self.state.enter(Mode::LineComment);
                    return 2;
                }
                Some('*') => {
                    self.stats.block_comments += 1;
                    self.stats.chars_removed += 2;
                    self.state.enter(Mode::BlockComment);
                    return 2;
                }
                _ => {}
            }
        }

        match c {
            STRING_QUOTE => self.state.open_string(c),
            CHAR_QUOTE => self.state.enter(Mode::CharLiteral),
            _ => {}
        }
        out.push(c);
        1
    }

    /// Drop a comment character, keeping line terminators
    fn discard_in_comment(&mut self, c: char, out: &mut String) {
        if is_line_terminator(c) {
            out.push(c);
        } else {
            self.stats.chars_removed += 1;
        }
    }
}

impl SourceFilter for CommentScanner {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn transform(&mut self, input: &str) -> String {
        CommentScanner::transform(self, input)
    }

    fn stats(&self) -> ScanStats {
        self.stats
    }
}

/// One-shot transform with a fresh scanner
pub fn strip_comments(input: &str) -> String {
    CommentScanner::new().transform(input)
}

fn peek(chars: &[char], idx: usize) -> Option<char> {
    chars.get(idx).copied()
}

fn is_triple_quote(chars: &[char], i: usize) -> bool {
    chars
        .get(i..i + TEXT_BLOCK_QUOTES)
        .is_some_and(|s| s.iter().all(|&c| c == STRING_QUOTE))
}

fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}
