//! decomment API - file processing orchestration
//!
//! Provides the file-level interface on top of the pure scanner, including:
//! - Run configuration bound to a file system (RunConfig)
//! - Output and backup naming (NamingPolicy)
//! - Single file and directory processing (Processor)
//! - Unified error handling (DecommentError)
//!
//! For string-to-string use without any IO, call [`strip`].

pub mod config;
pub mod error;
pub mod naming;
pub mod processor;
pub mod types;

pub use config::RunConfig;
pub use error::{ConfigIssue, DecommentError, VfsError};
pub use naming::{DefaultNaming, NamingPolicy};
pub use processor::Processor;
pub use types::{BatchReport, FileOutcome, FileStatus, InputKind};

// Re-export lower layers
pub use decomment_config::{LogLevel, Phase, StripConfig};
pub use decomment_core::{CommentScanner, Identity, ScanStats, SourceFilter};
pub use decomment_vfs::{MemoryFileSystem, NativeFileSystem, VirtualFileSystem};

/// Strip comments from a source string
///
/// Convenience wrapper over [`decomment_core::strip_comments`].
pub fn strip(source: &str) -> String {
    decomment_core::strip_comments(source)
}

/// Process a file or directory with the given configuration
pub fn run(path: &std::path::Path, config: RunConfig) -> Result<BatchReport, DecommentError> {
    Processor::new(config).process_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip("a /* b */ c"), "a  c");
        assert_eq!(strip("s = \"// no\";"), "s = \"// no\";");
    }
}
