//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::path::{Path, PathBuf};

/// Virtual File System trait
///
/// Provides a unified interface for whole-file reads and writes plus file
/// enumeration, decoupling the processor from a specific file system.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Write file contents
    ///
    /// Creates the file if it doesn't exist, truncates it if it does.
    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the files under `root`, sorted by path
    ///
    /// # Arguments
    /// * `root` - Directory to enumerate
    /// * `recursive` - Descend into subdirectories; otherwise only direct children
    ///
    /// # Returns
    /// File paths (no directories), or `NotFound` if `root` is not a directory
    fn list_files(&self, root: &Path, recursive: bool) -> VfsResult<Vec<PathBuf>>;
}
