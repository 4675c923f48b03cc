//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

/// A native OS file system implementation.
///
/// This wraps `std::fs` operations and `walkdir` enumeration behind the
/// `VirtualFileSystem` interface.
///
/// # Example
/// ```
/// use decomment_vfs::{NativeFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// assert!(!fs.exists(Path::new("/definitely/not/here.java")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    follow_links: bool,
}

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links while enumerating directories
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        trace!(target: "decomment::vfs", path = %path.display(), "read_file");
        std::fs::read(path).map_err(|e| VfsError::from_io(e, path))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        trace!(target: "decomment::vfs", path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| VfsError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, root: &Path, recursive: bool) -> VfsResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(VfsError::NotFound {
                path: root.to_string_lossy().to_string(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => {
                    warn!(target: "decomment::vfs", root = %root.display(), "Skipping unreadable entry: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}
