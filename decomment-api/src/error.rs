//! API error types
//!
//! Path-level failures. Problems with an individual file inside a batch are
//! not errors here: they are recorded in that file's `FileStatus` instead.

use std::path::PathBuf;
use thiserror::Error;

pub use decomment_config::ConfigIssue;
pub use decomment_vfs::VfsError;

/// decomment error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecommentError {
    /// Input path does not exist
    #[error("Path {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// A single file was given whose extension is not the configured one
    #[error("File must have .{} extension: {}", .expected, .path.display())]
    UnsupportedExtension { path: PathBuf, expected: String },

    /// Path exists but is neither a regular file nor a directory
    #[error("{} is neither a file nor a directory", .0.display())]
    NotFileOrDirectory(PathBuf),

    /// A directory was required
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A write target would overwrite the source it was derived from
    #[error("Refusing to write {} over its own source", .role)]
    WouldOverwriteSource { path: PathBuf, role: &'static str },

    /// Run options rejected before touching any file
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigIssue),

    /// File content is not valid UTF-8
    #[error("{} is not valid UTF-8 (byte offset {})", .path.display(), .offset)]
    InvalidUtf8 { path: PathBuf, offset: usize },

    /// File system failure
    #[error(transparent)]
    Vfs(#[from] VfsError),
}

impl DecommentError {
    /// Short machine-readable kind name
    pub fn kind(&self) -> &'static str {
        match self {
            DecommentError::NotFound(_) => "not_found",
            DecommentError::UnsupportedExtension { .. } => "unsupported_extension",
            DecommentError::NotFileOrDirectory(_) => "not_file_or_directory",
            DecommentError::NotADirectory(_) => "not_a_directory",
            DecommentError::WouldOverwriteSource { .. } => "would_overwrite_source",
            DecommentError::InvalidConfig(_) => "invalid_config",
            DecommentError::InvalidUtf8 { .. } => "invalid_utf8",
            DecommentError::Vfs(_) => "vfs",
        }
    }
}
