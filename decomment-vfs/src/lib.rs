//! decomment Virtual File System
//!
//! A virtual file system abstraction with two backends: the native OS file
//! system and an in-memory map for tests and dry runs.
//!
//! # Usage
//! ```rust
//! use decomment_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/src/A.java"), b"class A {}").unwrap();
//! assert!(fs.is_dir(Path::new("/src")));
//! assert_eq!(fs.list_files(Path::new("/src"), true).unwrap().len(), 1);
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

/// Create a new memory-based file system.
pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}

/// Create a new native file system.
pub fn native_fs() -> NativeFileSystem {
    NativeFileSystem::new()
}
