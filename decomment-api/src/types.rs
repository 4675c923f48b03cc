//! API types
//!
//! Per-file and per-run outcomes.

use decomment_core::ScanStats;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Output written
    Processed {
        output: PathBuf,
        /// Where the original content was saved, if backups are on
        backup: Option<PathBuf>,
        stats: ScanStats,
    },
    /// Nothing written (or only the backup); the batch carried on
    Failed { message: String },
}

/// Outcome for one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub source: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn processed(source: &Path, output: PathBuf, backup: Option<PathBuf>, stats: ScanStats) -> Self {
        Self {
            source: source.to_path_buf(),
            status: FileStatus::Processed {
                output,
                backup,
                stats,
            },
        }
    }

    pub fn failed(source: &Path, message: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            status: FileStatus::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Processed { .. })
    }

    /// Output path when processed
    pub fn output(&self) -> Option<&Path> {
        match &self.status {
            FileStatus::Processed { output, .. } => Some(output),
            FileStatus::Failed { .. } => None,
        }
    }

    /// Backup path when one was written
    pub fn backup(&self) -> Option<&Path> {
        match &self.status {
            FileStatus::Processed { backup, .. } => backup.as_deref(),
            FileStatus::Failed { .. } => None,
        }
    }
}

/// Whether a run was given a single file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    File,
    Directory,
}

/// Outcome of a whole run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub root: PathBuf,
    pub kind: InputKind,
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new(root: &Path, kind: InputKind) -> Self {
        Self {
            root: root.to_path_buf(),
            kind,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total comments removed across processed files
    pub fn comments_removed(&self) -> usize {
        self.files
            .iter()
            .filter_map(|f| match &f.status {
                FileStatus::Processed { stats, .. } => Some(stats.comments()),
                FileStatus::Failed { .. } => None,
            })
            .sum()
    }

    /// Pretty JSON rendering for tool integration
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
