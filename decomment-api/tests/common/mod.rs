//! Test helpers
//!
//! Builds throwaway source trees on disk.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use decomment_api::{Processor, RunConfig, StripConfig};
use tempfile::TempDir;

/// A temporary directory populated with files
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let tree = Self {
            dir: TempDir::new().expect("create temp dir"),
        };
        for (rel, content) in files {
            tree.write(rel, content.as_bytes());
        }
        tree
    }

    pub fn write(&self, rel: &str, content: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write fixture");
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read back")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }
}

/// Native-backed processor
pub fn processor(strip: StripConfig) -> Processor {
    init_test_logger();
    Processor::new(RunConfig::new(strip))
}

pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
