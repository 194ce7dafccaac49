//! Logging setup and the formatter binary's lifecycle events.
//!
//! Formatted output goes to stdout, so every subscriber installed here
//! writes to stderr.

use std::env;
use std::io;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::InputSource;
use crate::input::InputFormat;
use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            include_target: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub fn logging_config_from_env() -> LoggingConfig {
    let defaults = LoggingConfig::default();
    let var = |key: &str| env::var(key).ok();

    LoggingConfig {
        level: var("GRAPH_LOG_LEVEL")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.level),
        format: var("GRAPH_LOG_FORMAT")
            .as_deref()
            .and_then(parse_log_format)
            .unwrap_or(defaults.format),
        include_target: var("GRAPH_LOG_TARGET")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(defaults.include_target),
    }
}

pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let env_filter =
        EnvFilter::try_new(config.level.clone()).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.include_target)
        .with_writer(io::stderr)
        .with_ansi(!matches!(config.format, LogFormat::Json));

    match config.format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish())?,
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(builder.compact().finish())?
        }
    }

    Ok(())
}

pub fn log_app_start(config: &LoggingConfig) {
    info!(
        component = "graph_format",
        event = "app.start",
        log_level = %config.level,
        log_format = ?config.format,
        include_target = config.include_target
    );
}

pub fn log_interval_selected(interval: Interval, input: &InputSource, format: InputFormat) {
    match input {
        InputSource::File(path) => info!(
            component = "graph_format",
            event = "interval.selected",
            interval = %interval,
            input = "file",
            path = %path.display(),
            input_format = ?format
        ),
        InputSource::Stdin => info!(
            component = "graph_format",
            event = "interval.selected",
            interval = %interval,
            input = "stdin",
            input_format = ?format
        ),
        InputSource::Demo => info!(
            component = "graph_format",
            event = "interval.selected",
            interval = %interval,
            input = "demo"
        ),
    }
}

pub fn log_output_written(interval: Interval, entries: usize) {
    info!(
        component = "graph_format",
        event = "output.written",
        interval = %interval,
        entries
    );
}

fn parse_log_format(raw: &str) -> Option<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" => Some(LogFormat::Pretty),
        "compact" => Some(LogFormat::Compact),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
