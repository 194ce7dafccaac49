//! Environment-driven configuration for the formatter binary.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::input::{parse_input_format, InputFormat};
use crate::interval::{parse_interval, Interval, IntervalError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Demo,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    pub interval: Interval,
    pub input: InputSource,
    pub input_format: InputFormat,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            interval: Interval::Month,
            input: InputSource::Stdin,
            input_format: InputFormat::Json,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GRAPH_INTERVAL: {0}")]
    Interval(#[from] IntervalError),
    #[error("GRAPH_INPUT_FORMAT: unsupported input format: {0}")]
    InputFormat(String),
}

pub fn formatter_config_from_env() -> Result<FormatterConfig, ConfigError> {
    let mut config = FormatterConfig::default();

    if let Some(interval) = non_blank_var("GRAPH_INTERVAL") {
        config.interval = parse_interval(&interval)?;
    }

    if let Some(input) = non_blank_var("GRAPH_INPUT") {
        config.input = parse_input_source(&input);
    }

    if let Some(format) = non_blank_var("GRAPH_INPUT_FORMAT") {
        config.input_format =
            parse_input_format(&format).ok_or(ConfigError::InputFormat(format))?;
    }

    Ok(config)
}

fn parse_input_source(raw: &str) -> InputSource {
    match raw {
        "-" => InputSource::Stdin,
        "demo" => InputSource::Demo,
        path => InputSource::File(PathBuf::from(path)),
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
