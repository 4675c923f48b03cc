//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::trace;

/// An in-memory file system implementation.
///
/// All files are stored in memory using a `BTreeMap` keyed by normalised
/// path, making it suitable for testing and dry runs. Directories are
/// implicit: a directory exists while at least one file lives beneath it.
///
/// # Example
/// ```
/// use decomment_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.write_file(Path::new("/test.java"), b"hello").unwrap();
/// let content = fs.read_file(Path::new("/test.java")).unwrap();
/// assert_eq!(content, b"hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let map = files
            .into_iter()
            .map(|(path, content)| (normalize_path(Path::new(path.as_ref())), content))
            .collect();
        Self {
            files: Arc::new(RwLock::new(map)),
        }
    }

    fn read_guard(
        &self,
    ) -> VfsResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.files.read().map_err(|_| poisoned())
    }
}

/// Normalize a path string for internal storage.
/// Uses forward slashes consistently and drops a trailing separator.
fn normalize_path(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    match normalized.trim_end_matches('/') {
        "" if normalized.starts_with('/') => String::from("/"),
        trimmed => trimmed.to_string(),
    }
}

/// Key prefix shared by everything beneath `dir`
fn dir_prefix(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{}/", dir)
    }
}

fn poisoned() -> VfsError {
    VfsError::Io {
        message: String::from("Lock poisoned"),
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = normalize_path(path);
        trace!(target: "decomment::vfs", path = %normalized, "read_file (memory)");
        let files = self.read_guard()?;

        files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = normalize_path(path);
        trace!(target: "decomment::vfs", path = %normalized, bytes = content.len(), "write_file (memory)");
        if self.is_dir(path) {
            return Err(VfsError::InvalidPath {
                path: normalized,
                reason: String::from("is a directory"),
            });
        }
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        match self.files.read() {
            Ok(files) => files.contains_key(&normalized),
            Err(_) => false,
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let prefix = dir_prefix(&normalize_path(path));
        match self.files.read() {
            Ok(files) => files.keys().any(|key| key.starts_with(&prefix)),
            Err(_) => false,
        }
    }

    fn list_files(&self, root: &Path, recursive: bool) -> VfsResult<Vec<PathBuf>> {
        let normalized = normalize_path(root);
        let prefix = dir_prefix(&normalized);
        let files = self.read_guard()?;

        let mut found: Vec<PathBuf> = files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix).map(|rest| (key, rest)))
            .filter(|(_, rest)| recursive || !rest.contains('/'))
            .map(|(key, _)| PathBuf::from(key))
            .collect();

        if found.is_empty() && !files.keys().any(|key| key.starts_with(&prefix)) {
            return Err(VfsError::NotFound { path: normalized });
        }

        found.sort();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_fs_is_empty() {
        let fs = MemoryFileSystem::new();
        assert!(!fs.exists(Path::new("/anything.java")));
        assert!(!fs.is_dir(Path::new("/")));
    }

    #[test]
    fn test_write_and_read() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("/test.java");

        fs.write_file(path, b"hello world").unwrap();
        assert_eq!(fs.read_file(path).unwrap(), b"hello world");
    }

    #[test]
    fn test_empty_content() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("/empty.java");

        fs.write_file(path, b"").unwrap();
        assert!(fs.read_file(path).unwrap().is_empty());
    }

    #[test]
    fn test_overwrite_file() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("/overwrite.java");

        fs.write_file(path, b"first").unwrap();
        fs.write_file(path, b"second").unwrap();
        assert_eq!(fs.read_file(path).unwrap(), b"second");
    }

    #[test]
    fn test_read_nonexistent() {
        let fs = MemoryFileSystem::new();
        let result = fs.read_file(Path::new("/nonexistent.java"));
        assert!(matches!(result, Err(VfsError::NotFound { .. })));
    }

    #[test]
    fn test_backslash_paths_normalized() {
        let fs = MemoryFileSystem::new();
        fs.write_file(Path::new("\\src\\A.java"), b"a").unwrap();
        assert_eq!(fs.read_file(Path::new("/src/A.java")).unwrap(), b"a");
    }

    #[test]
    fn test_implicit_directories() {
        let fs = MemoryFileSystem::with_files([("/src/pkg/A.java", b"a".to_vec())]);

        assert!(fs.is_dir(Path::new("/src")));
        assert!(fs.is_dir(Path::new("/src/pkg")));
        assert!(fs.is_dir(Path::new("/src/pkg/")));
        assert!(fs.is_dir(Path::new("/")));
        assert!(!fs.is_dir(Path::new("/src/pkg/A.java")));
        assert!(!fs.is_dir(Path::new("/sr")));
        assert!(fs.exists(Path::new("/src")));
        assert!(!fs.is_file(Path::new("/src")));
    }

    #[test]
    fn test_write_onto_directory_fails() {
        let fs = MemoryFileSystem::with_files([("/src/A.java", b"a".to_vec())]);
        let result = fs.write_file(Path::new("/src"), b"x");
        assert!(matches!(result, Err(VfsError::InvalidPath { .. })));
    }

    #[test]
    fn test_list_recursive_and_flat() {
        let fs = MemoryFileSystem::with_files([
            ("/src/B.java", b"b".to_vec()),
            ("/src/A.java", b"a".to_vec()),
            ("/src/pkg/C.java", b"c".to_vec()),
            ("/other/D.java", b"d".to_vec()),
        ]);

        let all = fs.list_files(Path::new("/src"), true).unwrap();
        assert_eq!(
            all,
            vec![
                PathBuf::from("/src/A.java"),
                PathBuf::from("/src/B.java"),
                PathBuf::from("/src/pkg/C.java"),
            ]
        );

        let flat = fs.list_files(Path::new("/src"), false).unwrap();
        assert_eq!(
            flat,
            vec![PathBuf::from("/src/A.java"), PathBuf::from("/src/B.java")]
        );
    }

    #[test]
    fn test_list_only_subdirectories_flat() {
        let fs = MemoryFileSystem::with_files([("/src/pkg/C.java", b"c".to_vec())]);
        assert!(fs.list_files(Path::new("/src"), false).unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_root() {
        let fs = MemoryFileSystem::with_files([("/src/A.java", b"a".to_vec())]);
        let result = fs.list_files(Path::new("/nope"), true);
        assert!(matches!(result, Err(VfsError::NotFound { .. })));
    }

    #[test]
    fn test_clone_shares_data() {
        let fs1 = MemoryFileSystem::new();
        let path = Path::new("/shared.java");
        fs1.write_file(path, b"shared").unwrap();

        let fs2 = fs1.clone();
        assert_eq!(fs2.read_file(path).unwrap(), b"shared");

        fs2.write_file(path, b"modified").unwrap();
        assert_eq!(fs1.read_file(path).unwrap(), b"modified");
    }

    #[test]
    fn test_concurrent_reads() {
        let fs = MemoryFileSystem::with_files([("/test.java", b"concurrent".to_vec())]);
        let mut handles = vec![];

        for _ in 0..10 {
            let fs_clone = fs.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    let content = fs_clone.read_file(Path::new("/test.java")).unwrap();
                    assert_eq!(content, b"concurrent");
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
