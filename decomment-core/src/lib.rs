//! decomment Core - comment scanner (pure logic, no IO)
//!
//! Strips comments from C-family source text while keeping string literals,
//! character literals and text blocks untouched. Only operates on in-memory
//! strings, no file IO or terminal output.

pub mod kit;

// Re-export common types
pub use kit::scanner::{
    strip_comments, CommentScanner, Identity, Mode, ScanState, ScanStats, SourceFilter,
};
