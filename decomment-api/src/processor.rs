//! File processor
//!
//! Glue between the file system and a `SourceFilter`: read a whole file,
//! transform it, save a backup, write the result. A failure on one file is
//! recorded in its outcome and never stops the rest of a directory run.

use std::path::Path;

use decomment_core::{CommentScanner, SourceFilter};
use tracing::{debug, info, instrument, warn};

use crate::config::RunConfig;
use crate::error::DecommentError;
use crate::naming::{DefaultNaming, NamingPolicy};
use crate::types::{BatchReport, FileOutcome, InputKind};

/// Applies a filter to files through the configured file system
pub struct Processor<F: SourceFilter = CommentScanner> {
    config: RunConfig,
    naming: Box<dyn NamingPolicy>,
    filter: F,
}

impl Processor<CommentScanner> {
    /// Comment-stripping processor with the default naming policy
    pub fn new(config: RunConfig) -> Self {
        Self::with_filter(config, CommentScanner::new())
    }
}

impl<F: SourceFilter> Processor<F> {
    pub fn with_filter(config: RunConfig, filter: F) -> Self {
        let naming = Box::new(DefaultNaming::from_config(&config.strip));
        Self {
            config,
            naming,
            filter,
        }
    }

    /// Replace the naming policy
    pub fn with_naming(mut self, naming: impl NamingPolicy + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Dispatch on what `path` is
    ///
    /// # Errors
    /// - `InvalidConfig` if the run options could overwrite a source
    /// - `NotFound` if nothing exists at `path`
    /// - `UnsupportedExtension` for a single file with the wrong extension
    /// - `NotFileOrDirectory` for anything else that exists
    pub fn process_path(&mut self, path: &Path) -> Result<BatchReport, DecommentError> {
        self.config.strip.validate()?;
        let vfs = &self.config.vfs;

        if !vfs.exists(path) {
            return Err(DecommentError::NotFound(path.to_path_buf()));
        }

        if vfs.is_file(path) {
            if !self.has_extension(path) {
                return Err(DecommentError::UnsupportedExtension {
                    path: path.to_path_buf(),
                    expected: self.config.strip.extension_name().to_string(),
                });
            }
            let mut report = BatchReport::new(path, InputKind::File);
            report.push(self.process_file(path));
            return Ok(report);
        }

        if vfs.is_dir(path) {
            return self.process_directory(path);
        }

        Err(DecommentError::NotFileOrDirectory(path.to_path_buf()))
    }

    /// Process every matching file under `dir`
    ///
    /// Files are visited in sorted path order. Subdirectories are included
    /// unless the config turns recursion off.
    #[instrument(target = "decomment::processor", skip(self, dir), fields(dir = %dir.display()))]
    pub fn process_directory(&mut self, dir: &Path) -> Result<BatchReport, DecommentError> {
        self.config.strip.validate()?;
        let vfs = &self.config.vfs;
        if !vfs.is_dir(dir) {
            return Err(if vfs.exists(dir) {
                DecommentError::NotADirectory(dir.to_path_buf())
            } else {
                DecommentError::NotFound(dir.to_path_buf())
            });
        }

        let files: Vec<_> = vfs
            .list_files(dir, self.config.strip.recursive)?
            .into_iter()
            .filter(|p| self.has_extension(p))
            .collect();

        info!(
            target: "decomment::processor",
            count = files.len(),
            extension = self.config.strip.extension_name(),
            "Discovered files"
        );

        let mut report = BatchReport::new(dir, InputKind::Directory);
        for file in &files {
            report.push(self.process_file(file));
        }

        info!(
            target: "decomment::processor",
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Directory processed"
        );
        Ok(report)
    }

    /// Process one file, capturing any failure in the outcome
    pub fn process_file(&mut self, path: &Path) -> FileOutcome {
        match self.try_process_file(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(target: "decomment::processor", path = %path.display(), "Processing failed: {}", e);
                FileOutcome::failed(path, e.to_string())
            }
        }
    }

    fn try_process_file(&mut self, path: &Path) -> Result<FileOutcome, DecommentError> {
        let vfs = &self.config.vfs;

        let original = vfs.read_file(path)?;
        let text = std::str::from_utf8(&original).map_err(|e| DecommentError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: e.valid_up_to(),
        })?;

        let cleaned = self.filter.transform(text);
        let stats = self.filter.stats();
        debug!(
            target: "decomment::processor",
            path = %path.display(),
            filter = self.filter.name(),
            before = text.len(),
            after = cleaned.len(),
            comments = stats.comments(),
            "Transformed"
        );

        let output = self.naming.output_path(path);
        if output == path && !self.config.strip.in_place {
            return Err(DecommentError::WouldOverwriteSource {
                path: path.to_path_buf(),
                role: "output",
            });
        }

        let backup = if self.config.strip.backup {
            let backup_path = self.naming.backup_path(path);
            if backup_path == path {
                return Err(DecommentError::WouldOverwriteSource {
                    path: path.to_path_buf(),
                    role: "backup",
                });
            }
            vfs.write_file(&backup_path, &original)?;
            info!(target: "decomment::processor", path = %backup_path.display(), "Backup created");
            Some(backup_path)
        } else {
            None
        };

        vfs.write_file(&output, cleaned.as_bytes())?;
        info!(
            target: "decomment::processor",
            source = %path.display(),
            output = %output.display(),
            "Processed"
        );

        Ok(FileOutcome::processed(path, output, backup, stats))
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.strip.matches_extension(ext))
    }
}
