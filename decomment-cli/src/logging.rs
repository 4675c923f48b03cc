//! CLI logging initialisation
//!
//! Per-phase log control built on `tracing-subscriber`. Everything goes to
//! stderr so stdout carries only the run report.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::ValueEnum;
use decomment_config::Phase;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::Targets, fmt, fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, coloured (development)
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// JSON objects (tool integration)
    Json,
}

/// Build the target filter from the log configuration
pub fn targets(log_config: &LogConfig) -> Targets {
    Phase::all()
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase))
        })
}

/// Initialise logging with the given format, optionally mirrored to a file
///
/// # Errors
/// Fails only if the log file cannot be opened.
pub fn init_with_file(log_config: &LogConfig, format: LogFormat, file: Option<&Path>) -> io::Result<()> {
    let targets = targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let handle = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let console_layer = create_format_layer(format, io::stderr).with_filter(targets);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<S, W>(format: LogFormat, make_writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
