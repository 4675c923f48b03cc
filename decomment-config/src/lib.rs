//! decomment Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all decomment crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for one stripping run
///
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Write the original content next to the source before touching anything
    pub backup: bool,
    /// Overwrite the source file instead of writing a side-by-side copy
    pub in_place: bool,
    /// Descend into subdirectories when given a directory
    pub recursive: bool,
    /// File extension selecting which files are processed; a leading dot is ignored
    pub extension: String,
    /// Appended to the file stem of side-by-side outputs
    pub output_suffix: String,
    /// Appended to the full file name of backups
    pub backup_suffix: String,
    /// Global log level
    pub log_level: LogLevel,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            backup: true,
            in_place: false,
            recursive: true,
            extension: String::from("java"),
            output_suffix: String::from("_no_comments"),
            backup_suffix: String::from(".backup"),
            log_level: LogLevel::Warn,
        }
    }
}

impl StripConfig {
    /// Parse a JSON config document; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Configured extension without any leading dot
    pub fn extension_name(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Check whether a file extension selects a file for processing
    pub fn matches_extension(&self, ext: &str) -> bool {
        ext == self.extension_name()
    }

    /// Reject option combinations that would overwrite a source file by accident
    ///
    /// An empty backup suffix makes the backup the source itself. An empty
    /// output suffix does the same to the output unless `in_place` asks for it.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if self.extension_name().is_empty() {
            return Err(ConfigIssue::EmptyExtension);
        }
        if self.backup && self.backup_suffix.is_empty() {
            return Err(ConfigIssue::EmptyBackupSuffix);
        }
        if !self.in_place && self.output_suffix.is_empty() {
            return Err(ConfigIssue::EmptyOutputSuffix);
        }
        Ok(())
    }
}

/// Invalid option combination
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("extension must not be empty")]
    EmptyExtension,
    #[error("backup_suffix must not be empty when backups are enabled")]
    EmptyBackupSuffix,
    #[error("output_suffix must not be empty unless in_place is set")]
    EmptyOutputSuffix,
}

/// Log verbosity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. `silent` maps to `Error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Raise the level by `steps` (one per `-v` flag), saturating at `Trace`
    pub fn raised(self, steps: u8) -> Self {
        let mut level = self;
        for _ in 0..steps {
            level = match level {
                LogLevel::Error => LogLevel::Warn,
                LogLevel::Warn => LogLevel::Info,
                LogLevel::Info => LogLevel::Debug,
                LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
            };
        }
        level
    }
}

/// Processing phase, used to build log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Vfs,
    Processor,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Vfs => "vfs",
            Phase::Processor => "processor",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("decomment::{}", self.as_str())
    }

    pub fn all() -> [Phase; 4] {
        [Phase::Scanner, Phase::Vfs, Phase::Processor, Phase::Cli]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strip_config() {
        let cfg = StripConfig::default();
        assert!(cfg.backup);
        assert!(!cfg.in_place);
        assert!(cfg.recursive);
        assert_eq!(cfg.extension, "java");
        assert_eq!(cfg.output_suffix, "_no_comments");
        assert_eq!(cfg.backup_suffix, ".backup");
        assert_eq!(cfg.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = StripConfig::from_json(r#"{ "in_place": true, "log_level": "debug" }"#).unwrap();
        assert!(cfg.in_place);
        assert!(cfg.backup);
        assert_eq!(cfg.extension, "java");
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(StripConfig::from_json("{ backup: yes }").is_err());
        assert!(StripConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
    }

    #[test]
    fn test_matches_extension() {
        let cfg = StripConfig::default();
        assert!(cfg.matches_extension("java"));
        assert!(!cfg.matches_extension("kt"));
        assert!(!cfg.matches_extension("JAVA"));
    }

    #[test]
    fn test_extension_leading_dot_ignored() {
        let cfg = StripConfig::from_json(r#"{ "extension": ".java" }"#).unwrap();
        assert_eq!(cfg.extension_name(), "java");
        assert!(cfg.matches_extension("java"));
        assert!(!cfg.matches_extension(".java"));
    }

    #[test]
    fn test_validate() {
        assert_eq!(StripConfig::default().validate(), Ok(()));

        let cfg = StripConfig::from_json(r#"{ "output_suffix": "", "backup_suffix": "" }"#).unwrap();
        assert_eq!(cfg.validate(), Err(ConfigIssue::EmptyBackupSuffix));

        let cfg = StripConfig {
            backup: false,
            output_suffix: String::new(),
            ..StripConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigIssue::EmptyOutputSuffix));

        let cfg = StripConfig {
            in_place: true,
            backup: false,
            output_suffix: String::new(),
            backup_suffix: String::new(),
            ..StripConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = StripConfig {
            extension: ".".to_string(),
            ..StripConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigIssue::EmptyExtension));
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_log_level_raised() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Error.raised(9), LogLevel::Trace);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Scanner.as_str(), "scanner");
        assert_eq!(Phase::Processor.target(), "decomment::processor");
        assert_eq!(Phase::all().len(), 4);
    }
}
