//! Comment scanner
//!
//! Finite-state scanner classifying every input character as code, comment or
//! literal content:
//! - single pass, O(n), lookahead of at most three characters
//! - total: never fails, unterminated constructs run to end of input
//! - line count of the output always equals the input's

pub mod comment;
pub mod filter;
pub mod state;
pub mod url;

pub use comment::{strip_comments, CommentScanner};
pub use filter::{Identity, SourceFilter};
pub use state::{Mode, ScanState, ScanStats};
pub use url::{follows_url_scheme, URL_SCHEMES, URL_WINDOW};
