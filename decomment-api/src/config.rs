//! API layer configuration
//!
//! `RunConfig` bundles the run options with the file system they act on.

use decomment_config::StripConfig;
use decomment_vfs::{NativeFileSystem, VirtualFileSystem};
use std::sync::Arc;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Run options
    pub strip: StripConfig,
    /// File system all reads and writes go through
    pub vfs: Arc<dyn VirtualFileSystem>,
}

impl RunConfig {
    pub fn new(strip: StripConfig) -> Self {
        Self {
            strip,
            vfs: Arc::new(NativeFileSystem::new()),
        }
    }

    /// Swap the file system, e.g. for an in-memory one in tests
    pub fn with_vfs(mut self, vfs: Arc<dyn VirtualFileSystem>) -> Self {
        self.vfs = vfs;
        self
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("strip", &self.strip)
            .finish_non_exhaustive()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}
