//! CLI configuration
//!
//! Merges the optional JSON config file with command line flags, and holds
//! the per-phase log levels.

use std::path::{Path, PathBuf};

use decomment_config::{LogLevel, Phase, StripConfig};
use thiserror::Error;
use tracing::Level;

/// Config file problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a `StripConfig` from a JSON file; missing keys take their defaults
pub fn load_strip_config(path: &Path) -> Result<StripConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    StripConfig::from_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Command line overrides; `None` keeps the config file value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backup: Option<bool>,
    pub in_place: Option<bool>,
    pub recursive: Option<bool>,
    pub extension: Option<String>,
}

impl Overrides {
    pub fn apply(self, mut config: StripConfig) -> StripConfig {
        if let Some(backup) = self.backup {
            config.backup = backup;
        }
        if let Some(in_place) = self.in_place {
            config.in_place = in_place;
        }
        if let Some(recursive) = self.recursive {
            config.recursive = recursive;
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        config
    }
}

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub scanner: Option<Level>,
    pub vfs: Option<Level>,
    pub processor: Option<Level>,
    pub cli: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogLevel::Warn)
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            global: to_tracing_level(level),
            scanner: None,
            vfs: None,
            processor: None,
            cli: None,
        }
    }

    /// Base level from config, raised once per `-v`
    pub fn from_verbosity(base: LogLevel, verbose: u8) -> Self {
        Self::new(base.raised(verbose))
    }

    /// Override the level of a single phase
    pub fn with_phase(mut self, phase: Phase, level: LogLevel) -> Self {
        let level = Some(to_tracing_level(level));
        match phase {
            Phase::Scanner => self.scanner = level,
            Phase::Vfs => self.vfs = level,
            Phase::Processor => self.processor = level,
            Phase::Cli => self.cli = level,
        }
        self
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Scanner => self.scanner.unwrap_or(self.global),
            Phase::Vfs => self.vfs.unwrap_or(self.global),
            Phase::Processor => self.processor.unwrap_or(self.global),
            Phase::Cli => self.cli.unwrap_or(self.global),
        }
    }
}

/// Parse a `PHASE=LEVEL` pair such as `scanner=trace`
pub fn parse_phase_level(s: &str) -> Result<(Phase, LogLevel), String> {
    let (phase, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PHASE=LEVEL, got '{}'", s))?;
    let phase = Phase::all()
        .into_iter()
        .find(|p| p.as_str() == phase.trim())
        .ok_or_else(|| format!("unknown phase '{}'", phase))?;
    let level = LogLevel::parse(level.trim()).ok_or_else(|| format!("unknown log level '{}'", level))?;
    Ok((phase, level))
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
