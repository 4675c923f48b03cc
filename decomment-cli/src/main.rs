//! decomment CLI - Command line interface
//!
//! Strips comments from one source file or every matching file in a
//! directory tree. Options come from an optional JSON config file, with
//! command line flags taking precedence.

use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::{load_strip_config, parse_phase_level, LogConfig, Overrides};
use crate::logging::LogFormat;
use crate::platform::write_report;
use decomment_api::{DecommentError, InputKind, NativeFileSystem, Processor, RunConfig};
use decomment_config::{LogLevel, Phase, StripConfig};

#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    about = "Remove comments from C-family source files while preserving string and character literals",
    version
)]
struct Cli {
    /// Source file or directory to process
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Don't create backup files
    #[arg(long)]
    no_backup: bool,

    /// Modify files in place instead of creating new files
    #[arg(long)]
    in_place: bool,

    /// Don't process subdirectories recursively
    #[arg(long)]
    no_recursive: bool,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    follow_links: bool,

    /// File extension to process (default: java)
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Per-phase log level, e.g. `scanner=trace` (repeatable)
    #[arg(long = "log", value_name = "PHASE=LEVEL", value_parser = parse_phase_level)]
    log: Vec<(Phase, LogLevel)>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            backup: self.no_backup.then_some(false),
            in_place: self.in_place.then_some(true),
            recursive: self.no_recursive.then_some(false),
            extension: self.extension.clone(),
        }
    }

    fn log_config(&self, base: LogLevel) -> LogConfig {
        self.log
            .iter()
            .fold(LogConfig::from_verbosity(base, self.verbose), |cfg, (phase, level)| {
                cfg.with_phase(*phase, *level)
            })
    }
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

/// Run the CLI and return the process exit code
fn run(cli: &Cli) -> i32 {
    let file_config = match &cli.config {
        Some(path) => match load_strip_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        None => StripConfig::default(),
    };
    let strip = cli.overrides().apply(file_config);

    let log_config = cli.log_config(strip.log_level);
    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        return 1;
    }
    debug!(target: "decomment::cli", ?strip, "Resolved configuration");
    info!(target: "decomment::cli", path = %cli.path.display(), "Starting");

    let vfs = NativeFileSystem::new().follow_links(cli.follow_links);
    let mut processor = Processor::new(RunConfig::new(strip).with_vfs(Arc::new(vfs)));

    let report = match processor.process_path(&cli.path) {
        Ok(report) => report,
        Err(e) => {
            report_error(&e, cli.json);
            return 1;
        }
    };

    let extension = processor.config().strip.extension_name();
    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &report, extension, cli.json) {
        eprintln!("Error: Cannot write report: {}", e);
        return 1;
    }

    match report.kind {
        InputKind::File if report.failed() > 0 => 1,
        _ => 0,
    }
}

/// Path-level failure: plain text on stderr, or a JSON object on stdout
fn report_error(e: &DecommentError, json: bool) {
    if json {
        let value = serde_json::json!({ "error": e.kind(), "message": e.to_string() });
        println!("{}", value);
    } else {
        eprintln!("Error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_keep_config() {
        let cli = Cli::try_parse_from(["decomment", "src"]).unwrap();
        let merged = cli.overrides().apply(StripConfig::default());
        assert_eq!(merged, StripConfig::default());
        assert_eq!(cli.log_format, LogFormat::Compact);
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "decomment",
            "A.java",
            "--no-backup",
            "--in-place",
            "--no-recursive",
            "--follow-links",
            "--extension",
            "kt",
            "-vv",
            "--log",
            "scanner=trace",
            "--log-format",
            "json",
        ])
        .unwrap();

        let merged = cli.overrides().apply(StripConfig::default());
        assert!(!merged.backup);
        assert!(merged.in_place);
        assert!(!merged.recursive);
        assert_eq!(merged.extension, "kt");
        assert!(cli.follow_links);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);

        let log = cli.log_config(LogLevel::Warn);
        assert_eq!(log.global, tracing::Level::DEBUG);
        assert_eq!(log.level_for(Phase::Scanner), tracing::Level::TRACE);
    }

    #[test]
    fn test_bad_phase_rejected() {
        assert!(Cli::try_parse_from(["decomment", "src", "--log", "lexer=debug"]).is_err());
    }
}
